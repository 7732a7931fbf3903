use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on},
    Json, Router,
};
use model::fleet::{FleetUnit, Position};
use transfer::fleet::FleetTracking;

use crate::{
    common::{
        route_not_found, schema, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/units/schema", get(schema::<FleetUnit>))
        .route("/units/:id/position/schema", get(schema::<Position>))
        .route("/units/:id/position", get(get_unit_position))
        .route("/units", get(get_units))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

fn tracking(
    fleet: &Option<Arc<dyn FleetTracking + Send + Sync>>,
    method: &Method,
    uri: &str,
) -> Result<Arc<dyn FleetTracking + Send + Sync>, RouteErrorResponse> {
    fleet.clone().ok_or_else(|| {
        RouteErrorResponse::new(StatusCode::SERVICE_UNAVAILABLE)
            .with_method(method)
            .with_uri(uri)
            .with_message("Fleet tracking is not configured.")
    })
}

async fn get_units(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { fleet, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<FleetUnit>>> {
    let tracking = tracking(&fleet, &Method::GET, original_uri.path())?;
    tracking
        .units()
        .await
        .map(|units| Json(VecResponse::non_paginated(units)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_unit_position(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<u64>,
    State(WebState { fleet, .. }): State<WebState>,
) -> RouteResult<Json<Position>> {
    let tracking = tracking(&fleet, &Method::GET, original_uri.path())?;
    tracking.unit_position(id).await.map(Json).map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    })
}
