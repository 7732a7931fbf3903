use async_trait::async_trait;
use model::{
    location::{Location, LocationCategory},
    WithId,
};
use sqlx::prelude::FromRow;
use transfer::registry::{LocationRepo, RegistryError, Result};
use utility::id::Id;

use crate::{
    queries::location::{get, get_all, get_by_name, insert},
    PgStore,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Result<Self::Model> {
        let category: LocationCategory = self
            .category
            .parse()
            .map_err(|why| RegistryError::Other(Box::new(why)))?;
        Ok(Location {
            name: self.name,
            category,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

#[async_trait]
impl LocationRepo for PgStore {
    async fn location(&self, id: Id<Location>) -> Result<WithId<Location>> {
        get(&self.pool, id).await
    }

    async fn locations(&self) -> Result<Vec<WithId<Location>>> {
        get_all(&self.pool).await
    }

    async fn location_by_name(
        &self,
        name: &str,
    ) -> Result<Option<WithId<Location>>> {
        get_by_name(&self.pool, name).await
    }

    async fn insert_location(&self, location: Location) -> Result<WithId<Location>> {
        insert(&self.pool, location).await
    }
}
