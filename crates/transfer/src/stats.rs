use itertools::Itertools;
use model::{
    booking::{Booking, BookingStatus},
    vehicle::VehicleClass,
    WithId,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{registry::Store, RequestResult};

/// Admin dashboard numbers, reshaped from the booking table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub by_vehicle_class: Vec<ClassStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: BookingStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassStats {
    pub vehicle_class: VehicleClass,
    pub bookings: usize,
    /// Sum over completed bookings only.
    pub revenue: i64,
}

pub async fn booking_stats<S>(store: &S) -> RequestResult<BookingStats>
where
    S: Store + ?Sized,
{
    let bookings = store.bookings().await?;
    Ok(compute(&bookings))
}

fn compute(bookings: &[WithId<Booking>]) -> BookingStats {
    let counts = bookings
        .iter()
        .counts_by(|booking| booking.content.status);
    let by_status = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ]
    .into_iter()
    .map(|status| StatusCount {
        status,
        count: counts.get(&status).copied().unwrap_or(0),
    })
    .collect();

    let by_class = bookings
        .iter()
        .map(|booking| (booking.content.vehicle_class, &booking.content))
        .into_group_map();
    let by_vehicle_class = VehicleClass::all()
        .into_iter()
        .filter_map(|class| {
            let bookings = by_class.get(&class)?;
            Some(ClassStats {
                vehicle_class: class,
                bookings: bookings.len(),
                revenue: bookings
                    .iter()
                    .filter(|booking| booking.status == BookingStatus::Completed)
                    .map(|booking| booking.total_price)
                    .sum(),
            })
        })
        .collect();

    BookingStats {
        total: bookings.len(),
        by_status,
        by_vehicle_class,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use model::tariff::CURRENCY;
    use utility::id::Id;

    use super::*;

    fn booking(
        id: i64,
        class: VehicleClass,
        status: BookingStatus,
        total_price: i64,
    ) -> WithId<Booking> {
        WithId::new(
            Id::new(id),
            Booking {
                passenger_name: "Азиз".to_owned(),
                telegram_user_id: None,
                phone: None,
                from_location: Id::from_name("Самарканд"),
                to_location: Id::from_name("Аэропорт"),
                vehicle_class: class,
                pickup_at: Utc.with_ymd_and_hms(2024, 9, 14, 6, 30, 0).unwrap(),
                total_price,
                currency: CURRENCY.to_owned(),
                status,
                comment: None,
                created_at: Utc.with_ymd_and_hms(2024, 9, 13, 18, 0, 0).unwrap(),
            },
        )
    }

    #[test]
    fn counts_every_status_even_when_zero() {
        let stats = compute(&[
            booking(1, VehicleClass::Sedan, BookingStatus::Pending, 150_000),
            booking(2, VehicleClass::Sedan, BookingStatus::Completed, 150_000),
        ]);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_status.len(), 5);
        let completed = stats
            .by_status
            .iter()
            .find(|entry| entry.status == BookingStatus::Completed)
            .unwrap();
        assert_eq!(completed.count, 1);
        let cancelled = stats
            .by_status
            .iter()
            .find(|entry| entry.status == BookingStatus::Cancelled)
            .unwrap();
        assert_eq!(cancelled.count, 0);
    }

    #[test]
    fn revenue_only_counts_completed_bookings() {
        let stats = compute(&[
            booking(1, VehicleClass::Sedan, BookingStatus::Completed, 150_000),
            booking(2, VehicleClass::Sedan, BookingStatus::Cancelled, 150_000),
            booking(3, VehicleClass::Premium, BookingStatus::Completed, 300_000),
            booking(4, VehicleClass::Premium, BookingStatus::Completed, 200_000),
        ]);

        let sedan = stats
            .by_vehicle_class
            .iter()
            .find(|entry| entry.vehicle_class == VehicleClass::Sedan)
            .unwrap();
        assert_eq!(sedan.bookings, 2);
        assert_eq!(sedan.revenue, 150_000);

        let premium = stats
            .by_vehicle_class
            .iter()
            .find(|entry| entry.vehicle_class == VehicleClass::Premium)
            .unwrap();
        assert_eq!(premium.bookings, 2);
        assert_eq!(premium.revenue, 500_000);
    }

    #[test]
    fn classes_without_bookings_are_omitted() {
        let stats =
            compute(&[booking(1, VehicleClass::Bus, BookingStatus::Pending, 750_000)]);
        assert_eq!(stats.by_vehicle_class.len(), 1);
        assert_eq!(stats.by_vehicle_class[0].vehicle_class, VehicleClass::Bus);
    }

    #[test]
    fn empty_table_gives_empty_stats() {
        let stats = compute(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_vehicle_class.is_empty());
        assert!(stats.by_status.iter().all(|entry| entry.count == 0));
    }
}
