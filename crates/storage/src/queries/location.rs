use model::{location::Location, WithId};
use sqlx::{Executor, Postgres};
use transfer::registry::Result;
use utility::id::Id;

use crate::data_model::{location::LocationRow, with_id, with_ids};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Location>) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, category, latitude, longitude
        FROM locations
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: LocationRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, category, latitude, longitude
        FROM locations
        ORDER BY name;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)
    .and_then(|rows: Vec<LocationRow>| with_ids(rows))
}

pub async fn get_by_name<'c, E>(
    executor: E,
    name: &str,
) -> Result<Option<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    // `=` keeps the match case-sensitive.
    sqlx::query_as(
        "
        SELECT id, name, category, latitude, longitude
        FROM locations
        WHERE name = $1;
        ",
    )
    .bind(name)
    .fetch_optional(executor)
    .await
    .map_err(convert_error)?
    .map(|row: LocationRow| with_id(row))
    .transpose()
}

pub async fn insert<'c, E>(executor: E, location: Location) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    let id: Id<Location> = Id::from_name(&location.name);
    sqlx::query_as(
        "
        INSERT INTO locations(id, name, category, latitude, longitude)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, category, latitude, longitude;
        ",
    )
    .bind(id.raw())
    .bind(&location.name)
    .bind(location.category.as_str())
    .bind(location.latitude)
    .bind(location.longitude)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: LocationRow| with_id(row))
}
