use model::vehicle::{VehicleClass, VehicleType};
use sqlx::{Executor, Postgres};
use transfer::registry::Result;

use crate::data_model::vehicle::VehicleTypeRow;

use super::convert_error;

pub async fn get_by_class<'c, E>(
    executor: E,
    class: VehicleClass,
) -> Result<VehicleType>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT class, display_name, capacity, price_per_km
        FROM vehicle_types
        WHERE class = $1;
        ",
    )
    .bind(class.as_str())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: VehicleTypeRow| row.to_model())
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<VehicleType>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT class, display_name, capacity, price_per_km
        FROM vehicle_types
        ORDER BY price_per_km;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .into_iter()
    .map(|row: VehicleTypeRow| row.to_model())
    .collect()
}

pub async fn upsert<'c, E>(executor: E, vehicle: &VehicleType) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query(
        "
        INSERT INTO vehicle_types(class, display_name, capacity, price_per_km)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (class) DO NOTHING;
        ",
    )
    .bind(vehicle.class.as_str())
    .bind(&vehicle.display_name)
    .bind(vehicle.capacity as i32)
    .bind(vehicle.price_per_km)
    .execute(executor)
    .await
    .map_err(convert_error)
    .map(|_| ())
}
