use async_trait::async_trait;
use model::vehicle::{VehicleClass, VehicleType};
use sqlx::prelude::FromRow;
use transfer::registry::{RegistryError, Result, VehicleTypeRepo};

use crate::{
    queries::vehicle::{get_all, get_by_class},
    PgStore,
};

#[derive(Debug, Clone, FromRow)]
pub struct VehicleTypeRow {
    pub class: String,
    pub display_name: String,
    pub capacity: i32,
    pub price_per_km: i64,
}

impl VehicleTypeRow {
    // Keyed by class rather than a surrogate id, so this one does not go
    // through `DatabaseRow`.
    pub fn to_model(self) -> Result<VehicleType> {
        let class: VehicleClass = self
            .class
            .parse()
            .map_err(|why| RegistryError::Other(Box::new(why)))?;
        let capacity = u32::try_from(self.capacity)
            .map_err(|why| RegistryError::Other(Box::new(why)))?;
        Ok(VehicleType {
            class,
            display_name: self.display_name,
            capacity,
            price_per_km: self.price_per_km,
        })
    }
}

#[async_trait]
impl VehicleTypeRepo for PgStore {
    async fn vehicle_by_class(&self, class: VehicleClass) -> Result<VehicleType> {
        get_by_class(&self.pool, class).await
    }

    async fn vehicles(&self) -> Result<Vec<VehicleType>> {
        get_all(&self.pool).await
    }
}
