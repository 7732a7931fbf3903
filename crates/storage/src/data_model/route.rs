use async_trait::async_trait;
use model::{location::Location, route::Route, WithId};
use sqlx::prelude::FromRow;
use transfer::registry::{Result, RouteRepo};
use utility::id::Id;

use crate::{
    queries::route::{get, get_all, get_by_endpoints, insert},
    PgStore,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct RouteRow {
    pub id: String,
    pub from_location: String,
    pub to_location: String,
    pub distance_km: f64,
    pub duration_minutes: i32,
    pub base_price: i64,
}

impl DatabaseRow for RouteRow {
    type Model = Route;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Result<Self::Model> {
        Ok(Route {
            from_location: Id::new(self.from_location),
            to_location: Id::new(self.to_location),
            distance_km: self.distance_km,
            duration_minutes: self.duration_minutes,
            base_price: self.base_price,
        })
    }
}

#[async_trait]
impl RouteRepo for PgStore {
    async fn route(&self, id: Id<Route>) -> Result<WithId<Route>> {
        get(&self.pool, id).await
    }

    async fn routes(&self) -> Result<Vec<WithId<Route>>> {
        get_all(&self.pool).await
    }

    async fn route_by_endpoints(
        &self,
        from: &Id<Location>,
        to: &Id<Location>,
    ) -> Result<Option<WithId<Route>>> {
        get_by_endpoints(&self.pool, from, to).await
    }

    async fn insert_route(&self, route: Route) -> Result<WithId<Route>> {
        insert(&self.pool, route).await
    }
}
