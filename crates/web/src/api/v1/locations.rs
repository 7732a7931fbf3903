use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
    routing::{get, on},
    Extension, Json, Router,
};
use model::{location::Location, WithId};
use utility::id::Id;

use crate::{
    common::{
        route_not_found, schema, HateoasResult, RouteErrorResponse, VecResponse,
        METHOD_FILTER_ALL,
    },
    hateoas,
    middleware::base_url::BaseUrl,
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/locations{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Location>))
        .route("/:id", get(get_location))
        .route("/", get(get_locations).post(add_location))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_locations(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<Location>>> {
    service
        .locations()
        .await
        .map(|locations| {
            let data = locations
                .into_iter()
                .map(|location| location_hateoas(location, base_url.clone()))
                .collect::<Vec<_>>();
            Json(VecResponse::non_paginated(data).hateoas())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_location(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<Location> {
    service
        .location(Id::new(id))
        .await
        .map(|location| location_hateoas(location, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn add_location(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
    Json(location): Json<Location>,
) -> HateoasResult<Location> {
    service
        .add_location(location)
        .await
        .map(|location| location_hateoas(location, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

pub(crate) fn location_hateoas(
    location: WithId<Location>,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<Location> {
    let id = location.id.clone();
    hateoas::Response::builder(location.content, base_url)
        .link("self", resource!("/{}", id))
        .build()
}
