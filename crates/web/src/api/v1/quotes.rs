use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on, post},
    Extension, Json, Router,
};
use model::{tariff::TariffQuote, vehicle::VehicleClass};
use serde::Deserialize;
use transfer::{tariff::QuoteRequest, RequestError};

use crate::{
    common::{route_not_found, schema, HateoasResult, RouteErrorResponse, METHOD_FILTER_ALL},
    hateoas,
    middleware::base_url::BaseUrl,
    WebState,
};

use super::{bookings, routes as route_resources};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<TariffQuote>))
        .route("/", post(create_quote))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDto {
    from: String,
    to: String,
    vehicle_class: String,
    distance_km: Option<f64>,
}

async fn create_quote(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
    Json(dto): Json<QuoteDto>,
) -> HateoasResult<TariffQuote> {
    let vehicle_class: VehicleClass = dto.vehicle_class.parse().map_err(|why| {
        RouteErrorResponse::from(RequestError::from(why))
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
    })?;

    let request = QuoteRequest {
        from: dto.from,
        to: dto.to,
        vehicle_class,
        distance_km: dto.distance_km,
    };
    service
        .quote(&request)
        .await
        .map(|quote| quote_hateoas(quote, base_url).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

fn quote_hateoas(
    quote: TariffQuote,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<TariffQuote> {
    let route_link = quote
        .route_id
        .as_ref()
        .map(|id| route_resources::resource!("/{}", id));
    let estimated = quote.route_id.is_none();
    hateoas::Response::builder(quote, base_url)
        .link("book", bookings::resource!(""))
        .link_option("route", route_link)
        .debug_info("distanceEstimated", estimated)
        .build()
}
