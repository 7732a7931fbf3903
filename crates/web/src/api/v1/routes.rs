use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
    routing::{get, on},
    Extension, Json, Router,
};
use model::{route::Route, WithId};
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

use super::locations;

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/routes{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Route>))
        .route("/:id", get(get_route))
        .route("/", get(get_routes).post(add_route))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_routes(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<Route>>> {
    service
        .routes()
        .await
        .map(|routes| {
            let data = routes
                .into_iter()
                .map(|route| route_hateoas(route, base_url.clone()))
                .collect::<Vec<_>>();
            Json(VecResponse::non_paginated(data).hateoas())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_route(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<Route> {
    service
        .route(Id::new(id))
        .await
        .map(|route| route_hateoas(route, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn add_route(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
    Json(route): Json<Route>,
) -> HateoasResult<Route> {
    service
        .add_route(route)
        .await
        .map(|route| route_hateoas(route, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

fn route_hateoas(
    route: WithId<Route>,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<Route> {
    let id = route.id.clone();
    let from = route.content.from_location.clone();
    let to = route.content.to_location.clone();
    hateoas::Response::builder(route.content, base_url)
        .link("self", resource!("/{}", id))
        .link("from", locations::resource!("/{}", from))
        .link("to", locations::resource!("/{}", to))
        .build()
}
