use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on},
    Json, Router,
};
use model::vehicle::VehicleType;

use crate::{
    common::{
        route_not_found, schema, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<VehicleType>))
        .route("/", get(get_vehicles))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_vehicles(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<VehicleType>>> {
    service
        .vehicles()
        .await
        .map(|vehicles| Json(VecResponse::non_paginated(vehicles)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}
