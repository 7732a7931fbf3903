use model::{
    booking::{Booking, BookingStatus},
    WithId,
};
use sqlx::{Executor, Postgres};
use transfer::registry::Result;
use utility::id::Id;

use crate::data_model::{booking::BookingRow, with_id, with_ids};

use super::convert_error;

const COLUMNS: &str = "id, passenger_name, telegram_user_id, phone, \
                       from_location, to_location, vehicle_class, pickup_at, \
                       total_price, currency, status, comment, created_at";

pub async fn get<'c, E>(executor: E, id: Id<Booking>) -> Result<WithId<Booking>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {} FROM bookings WHERE id = $1;",
        COLUMNS
    ))
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: BookingRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Booking>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {} FROM bookings ORDER BY created_at DESC;",
        COLUMNS
    ))
    .fetch_all(executor)
    .await
    .map_err(convert_error)
    .and_then(|rows: Vec<BookingRow>| with_ids(rows))
}

pub async fn insert<'c, E>(executor: E, booking: Booking) -> Result<WithId<Booking>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO bookings(
            passenger_name,
            telegram_user_id,
            phone,
            from_location,
            to_location,
            vehicle_class,
            pickup_at,
            total_price,
            currency,
            status,
            comment,
            created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING {};
        ",
        COLUMNS
    ))
    .bind(&booking.passenger_name)
    .bind(booking.telegram_user_id)
    .bind(&booking.phone)
    .bind(booking.from_location.raw())
    .bind(booking.to_location.raw())
    .bind(booking.vehicle_class.as_str())
    .bind(booking.pickup_at)
    .bind(booking.total_price)
    .bind(&booking.currency)
    .bind(booking.status.as_str())
    .bind(&booking.comment)
    .bind(booking.created_at)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: BookingRow| with_id(row))
}

pub async fn set_status<'c, E>(
    executor: E,
    id: Id<Booking>,
    status: BookingStatus,
) -> Result<WithId<Booking>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "UPDATE bookings SET status = $1 WHERE id = $2 RETURNING {};",
        COLUMNS
    ))
    .bind(status.as_str())
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: BookingRow| with_id(row))
}
