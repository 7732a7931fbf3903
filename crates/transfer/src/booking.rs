use chrono::{DateTime, Utc};
use model::{
    booking::{Booking, BookingStatus},
    tariff::CURRENCY,
    vehicle::VehicleClass,
    WithId,
};
use utility::id::Id;

use crate::{
    registry::Store,
    tariff::{self, QuoteRequest},
    RequestError, RequestResult,
};

/// A trip request as the booking flow submits it. The price is not part of
/// the input: it is resolved at creation time and frozen into the booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub passenger_name: String,
    pub telegram_user_id: Option<i64>,
    pub phone: Option<String>,
    pub from: String,
    pub to: String,
    pub vehicle_class: VehicleClass,
    pub pickup_at: DateTime<Utc>,
    pub distance_km: Option<f64>,
    pub comment: Option<String>,
}

pub async fn create<S>(store: &S, new: NewBooking) -> RequestResult<WithId<Booking>>
where
    S: Store + ?Sized,
{
    if new.passenger_name.trim().is_empty() {
        return Err(RequestError::invalid_argument(
            "passenger name must not be empty",
        ));
    }

    let from = store
        .location_by_name(&new.from)
        .await?
        .ok_or(RequestError::NotFound)?;
    let to = store
        .location_by_name(&new.to)
        .await?
        .ok_or(RequestError::NotFound)?;

    let quote = tariff::resolve(
        store,
        &QuoteRequest {
            from: new.from,
            to: new.to,
            vehicle_class: new.vehicle_class,
            distance_km: new.distance_km,
        },
    )
    .await?;

    let booking = store
        .insert_booking(Booking {
            passenger_name: new.passenger_name,
            telegram_user_id: new.telegram_user_id,
            phone: new.phone,
            from_location: from.id,
            to_location: to.id,
            vehicle_class: new.vehicle_class,
            pickup_at: new.pickup_at,
            total_price: quote.total_price,
            currency: CURRENCY.to_owned(),
            status: BookingStatus::Pending,
            comment: new.comment,
            created_at: Utc::now(),
        })
        .await?;

    log::info!(
        "booking {} created: {} -> {}, {} {}",
        booking.id,
        booking.content.from_location,
        booking.content.to_location,
        booking.content.total_price,
        booking.content.currency
    );
    Ok(booking)
}

pub async fn update_status<S>(
    store: &S,
    id: Id<Booking>,
    next: BookingStatus,
) -> RequestResult<WithId<Booking>>
where
    S: Store + ?Sized,
{
    let current = store.booking(id.clone()).await?;
    if !current.content.status.can_transition_to(next) {
        return Err(RequestError::InvalidArgument(format!(
            "booking {} cannot go from {:?} to {:?}",
            id, current.content.status, next
        )));
    }
    let updated = store.set_booking_status(id, next).await?;
    log::info!("booking {} is now {:?}", updated.id, updated.content.status);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{registry::BookingRepo, test_support::MemoryStore};

    fn new_booking(from: &str, to: &str) -> NewBooking {
        NewBooking {
            passenger_name: "Азиз".to_owned(),
            telegram_user_id: Some(433_512_765),
            phone: None,
            from: from.to_owned(),
            to: to.to_owned(),
            vehicle_class: VehicleClass::Sedan,
            pickup_at: Utc.with_ymd_and_hms(2024, 9, 14, 6, 30, 0).unwrap(),
            distance_km: None,
            comment: None,
        }
    }

    #[tokio::test]
    async fn created_booking_freezes_the_quoted_price() {
        let store = MemoryStore::seeded();
        let booking = create(&store, new_booking("Самарканд", "Аэропорт"))
            .await
            .unwrap();

        assert_eq!(booking.content.total_price, 150_000);
        assert_eq!(booking.content.currency, "UZS");
        assert_eq!(booking.content.status, BookingStatus::Pending);
        assert_eq!(booking.content.from_location, Id::from_name("Самарканд"));
    }

    #[tokio::test]
    async fn empty_passenger_name_is_rejected() {
        let store = MemoryStore::seeded();
        let mut new = new_booking("Самарканд", "Аэропорт");
        new.passenger_name = "  ".to_owned();
        let result = create(&store, new).await;
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn unknown_location_is_not_found() {
        let store = MemoryStore::seeded();
        let result = create(&store, new_booking("Ташкент", "Аэропорт")).await;
        assert!(matches!(result, Err(RequestError::NotFound)));
    }

    #[tokio::test]
    async fn valid_status_transitions_are_applied() {
        let store = MemoryStore::seeded();
        let booking = create(&store, new_booking("Самарканд", "Аэропорт"))
            .await
            .unwrap();

        let confirmed =
            update_status(&store, booking.id.clone(), BookingStatus::Confirmed)
                .await
                .unwrap();
        assert_eq!(confirmed.content.status, BookingStatus::Confirmed);

        let in_progress =
            update_status(&store, booking.id.clone(), BookingStatus::InProgress)
                .await
                .unwrap();
        assert_eq!(in_progress.content.status, BookingStatus::InProgress);
    }

    #[tokio::test]
    async fn invalid_status_transition_is_rejected() {
        let store = MemoryStore::seeded();
        let booking = create(&store, new_booking("Самарканд", "Аэропорт"))
            .await
            .unwrap();

        let result =
            update_status(&store, booking.id.clone(), BookingStatus::Completed)
                .await;
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));

        // and the stored status is untouched
        let stored = store.booking(booking.id).await.unwrap();
        assert_eq!(stored.content.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn status_update_for_missing_booking_is_not_found() {
        let store = MemoryStore::seeded();
        let result =
            update_status(&store, Id::new(404), BookingStatus::Confirmed).await;
        assert!(matches!(result, Err(RequestError::NotFound)));
    }
}
