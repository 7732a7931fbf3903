use async_trait::async_trait;
use chrono::{DateTime, Utc};
use model::{
    booking::{Booking, BookingStatus},
    vehicle::VehicleClass,
    WithId,
};
use sqlx::prelude::FromRow;
use transfer::registry::{BookingRepo, RegistryError, Result};
use utility::id::Id;

use crate::{
    queries::booking::{get, get_all, insert, set_status},
    PgStore,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: i64,
    pub passenger_name: String,
    pub telegram_user_id: Option<i64>,
    pub phone: Option<String>,
    pub from_location: String,
    pub to_location: String,
    pub vehicle_class: String,
    pub pickup_at: DateTime<Utc>,
    pub total_price: i64,
    pub currency: String,
    pub status: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DatabaseRow for BookingRow {
    type Model = Booking;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Result<Self::Model> {
        let vehicle_class: VehicleClass = self
            .vehicle_class
            .parse()
            .map_err(|why| RegistryError::Other(Box::new(why)))?;
        let status: BookingStatus = self
            .status
            .parse()
            .map_err(|why| RegistryError::Other(Box::new(why)))?;
        Ok(Booking {
            passenger_name: self.passenger_name,
            telegram_user_id: self.telegram_user_id,
            phone: self.phone,
            from_location: Id::new(self.from_location),
            to_location: Id::new(self.to_location),
            vehicle_class,
            pickup_at: self.pickup_at,
            total_price: self.total_price,
            currency: self.currency,
            status,
            comment: self.comment,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl BookingRepo for PgStore {
    async fn booking(&self, id: Id<Booking>) -> Result<WithId<Booking>> {
        get(&self.pool, id).await
    }

    async fn bookings(&self) -> Result<Vec<WithId<Booking>>> {
        get_all(&self.pool).await
    }

    async fn insert_booking(&self, booking: Booking) -> Result<WithId<Booking>> {
        insert(&self.pool, booking).await
    }

    async fn set_booking_status(
        &self,
        id: Id<Booking>,
        status: BookingStatus,
    ) -> Result<WithId<Booking>> {
        set_status(&self.pool, id, status).await
    }
}
