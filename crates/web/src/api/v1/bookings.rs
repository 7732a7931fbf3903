use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
    routing::{get, on, patch},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use model::{
    booking::{Booking, BookingStatus},
    vehicle::VehicleClass,
    WithId,
};
use serde::Deserialize;
use transfer::{booking::NewBooking, RequestError};
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
        crate::api::v1::resource!("/bookings{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Booking>))
        .route("/:id/status", patch(set_booking_status))
        .route("/:id", get(get_booking))
        .route("/", get(get_bookings).post(add_booking))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingDto {
    passenger_name: String,
    telegram_user_id: Option<i64>,
    phone: Option<String>,
    from: String,
    to: String,
    vehicle_class: String,
    pickup_at: DateTime<Utc>,
    distance_km: Option<f64>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusDto {
    status: BookingStatus,
}

async fn get_bookings(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<Booking>>> {
    service
        .bookings()
        .await
        .map(|bookings| {
            let data = bookings
                .into_iter()
                .map(|booking| booking_hateoas(booking, base_url.clone()))
                .collect::<Vec<_>>();
            Json(VecResponse::non_paginated(data).hateoas())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_booking(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<i64>,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<Booking> {
    service
        .booking(Id::new(id))
        .await
        .map(|booking| booking_hateoas(booking, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn add_booking(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
    Json(dto): Json<BookingDto>,
) -> HateoasResult<Booking> {
    let vehicle_class: VehicleClass = dto.vehicle_class.parse().map_err(|why| {
        RouteErrorResponse::from(RequestError::from(why))
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
    })?;

    let new = NewBooking {
        passenger_name: dto.passenger_name,
        telegram_user_id: dto.telegram_user_id,
        phone: dto.phone,
        from: dto.from,
        to: dto.to,
        vehicle_class,
        pickup_at: dto.pickup_at,
        distance_km: dto.distance_km,
        comment: dto.comment,
    };
    service
        .create_booking(new)
        .await
        .map(|booking| booking_hateoas(booking, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn set_booking_status(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<i64>,
    State(WebState { service, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
    Json(dto): Json<StatusDto>,
) -> HateoasResult<Booking> {
    service
        .update_booking_status(Id::new(id), dto.status)
        .await
        .map(|booking| booking_hateoas(booking, base_url.clone()).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PATCH)
                .with_uri(original_uri.path())
        })
}

fn booking_hateoas(
    booking: WithId<Booking>,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<Booking> {
    let id = booking.id.clone();
    let from = booking.content.from_location.clone();
    let to = booking.content.to_location.clone();
    hateoas::Response::builder(booking.content, base_url)
        .link("self", resource!("/{}", id))
        .link("status", resource!("/{}/status", id))
        .link("from", locations::resource!("/{}", from))
        .link("to", locations::resource!("/{}", to))
        .build()
}
