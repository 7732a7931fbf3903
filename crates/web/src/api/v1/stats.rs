use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on},
    Json, Router,
};
use transfer::stats::BookingStats;

use crate::{
    common::{
        route_not_found, schema_no_example, RouteErrorResponse, RouteResult,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/bookings/schema", get(schema_no_example::<BookingStats>))
        .route("/bookings", get(get_booking_stats))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_booking_stats(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
) -> RouteResult<Json<BookingStats>> {
    service.booking_stats().await.map(Json).map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    })
}
