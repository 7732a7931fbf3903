use model::{location::Location, route::Route, WithId};
use sqlx::{Executor, Postgres};
use transfer::registry::Result;
use utility::id::Id;

use crate::data_model::{route::RouteRow, with_id, with_ids};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Route>) -> Result<WithId<Route>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, from_location, to_location, distance_km, duration_minutes,
               base_price
        FROM routes
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: RouteRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Route>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, from_location, to_location, distance_km, duration_minutes,
               base_price
        FROM routes
        ORDER BY id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)
    .and_then(|rows: Vec<RouteRow>| with_ids(rows))
}

pub async fn get_by_endpoints<'c, E>(
    executor: E,
    from: &Id<Location>,
    to: &Id<Location>,
) -> Result<Option<WithId<Route>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, from_location, to_location, distance_km, duration_minutes,
               base_price
        FROM routes
        WHERE from_location = $1 AND to_location = $2;
        ",
    )
    .bind(from.raw())
    .bind(to.raw())
    .fetch_optional(executor)
    .await
    .map_err(convert_error)?
    .map(|row: RouteRow| with_id(row))
    .transpose()
}

pub async fn insert<'c, E>(executor: E, route: Route) -> Result<WithId<Route>>
where
    E: Executor<'c, Database = Postgres>,
{
    let id = Route::derive_id(&route.from_location, &route.to_location);
    sqlx::query_as(
        "
        INSERT INTO routes(
            id,
            from_location,
            to_location,
            distance_km,
            duration_minutes,
            base_price
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, from_location, to_location, distance_km, duration_minutes,
                  base_price;
        ",
    )
    .bind(id.raw())
    .bind(route.from_location.raw())
    .bind(route.to_location.raw())
    .bind(route.distance_km)
    .bind(route.duration_minutes)
    .bind(route.base_price)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .and_then(|row: RouteRow| with_id(row))
}
