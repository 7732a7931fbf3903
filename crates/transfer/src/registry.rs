use std::{error, fmt, result};

use async_trait::async_trait;
use model::{
    booking::{Booking, BookingStatus},
    location::Location,
    route::Route,
    vehicle::{VehicleClass, VehicleType},
    WithId,
};
use utility::id::Id;

#[derive(Debug)]
pub enum RegistryError {
    NotFound,
    /// Violation of a storage-level uniqueness constraint.
    Conflict(String),
    Other(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound => write!(f, "entry not found"),
            RegistryError::Conflict(message) => write!(f, "conflict: {}", message),
            RegistryError::Other(why) => write!(f, "{}", why),
        }
    }
}

impl error::Error for RegistryError {}

pub type Result<T> = result::Result<T, RegistryError>;

/// Read/write access to the location registry. The resolver reads through
/// this on every call; implementations must return the current committed
/// state, with no caching of their own.
#[async_trait]
pub trait LocationRepo {
    async fn location(&self, id: Id<Location>) -> Result<WithId<Location>>;
    async fn locations(&self) -> Result<Vec<WithId<Location>>>;
    /// Exact, case-sensitive match on the display name.
    async fn location_by_name(&self, name: &str)
        -> Result<Option<WithId<Location>>>;
    async fn insert_location(&self, location: Location) -> Result<WithId<Location>>;
}

#[async_trait]
pub trait RouteRepo {
    async fn route(&self, id: Id<Route>) -> Result<WithId<Route>>;
    async fn routes(&self) -> Result<Vec<WithId<Route>>>;
    /// The registry holds at most one route per directed (from, to) pair.
    async fn route_by_endpoints(
        &self,
        from: &Id<Location>,
        to: &Id<Location>,
    ) -> Result<Option<WithId<Route>>>;
    async fn insert_route(&self, route: Route) -> Result<WithId<Route>>;
}

#[async_trait]
pub trait VehicleTypeRepo {
    async fn vehicle_by_class(&self, class: VehicleClass) -> Result<VehicleType>;
    async fn vehicles(&self) -> Result<Vec<VehicleType>>;
}

#[async_trait]
pub trait BookingRepo {
    async fn booking(&self, id: Id<Booking>) -> Result<WithId<Booking>>;
    async fn bookings(&self) -> Result<Vec<WithId<Booking>>>;
    async fn insert_booking(&self, booking: Booking) -> Result<WithId<Booking>>;
    async fn set_booking_status(
        &self,
        id: Id<Booking>,
        status: BookingStatus,
    ) -> Result<WithId<Booking>>;
}

pub trait Store:
    LocationRepo + RouteRepo + VehicleTypeRepo + BookingRepo + Send + Sync
{
}

impl<T> Store for T where
    T: LocationRepo + RouteRepo + VehicleTypeRepo + BookingRepo + Send + Sync
{
}
