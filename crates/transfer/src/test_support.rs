//! In-memory registry fixture for service tests.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

use async_trait::async_trait;
use model::{
    booking::{Booking, BookingStatus},
    location::{Location, LocationCategory},
    route::Route,
    vehicle::{VehicleClass, VehicleType},
    WithId,
};
use utility::id::Id;

use crate::registry::{
    BookingRepo, LocationRepo, RegistryError, Result, RouteRepo, VehicleTypeRepo,
};

pub(crate) struct MemoryStore {
    locations: Vec<WithId<Location>>,
    routes: Vec<WithId<Route>>,
    vehicles: Vec<VehicleType>,
    bookings: Mutex<Vec<WithId<Booking>>>,
    next_booking_id: AtomicI64,
}

fn location(
    name: &str,
    category: LocationCategory,
    coordinates: Option<(f64, f64)>,
) -> WithId<Location> {
    WithId::new(
        Id::from_name(name),
        Location {
            name: name.to_owned(),
            category,
            latitude: coordinates.map(|(lat, _)| lat),
            longitude: coordinates.map(|(_, lon)| lon),
        },
    )
}

fn route(
    from: &str,
    to: &str,
    distance_km: f64,
    duration_minutes: i32,
    base_price: i64,
) -> WithId<Route> {
    let from = Id::from_name(from);
    let to = Id::from_name(to);
    WithId::new(
        Route::derive_id(&from, &to),
        Route {
            from_location: from,
            to_location: to,
            distance_km,
            duration_minutes,
            base_price,
        },
    )
}

fn vehicle(
    class: VehicleClass,
    display_name: &str,
    capacity: u32,
    price_per_km: i64,
) -> VehicleType {
    VehicleType {
        class,
        display_name: display_name.to_owned(),
        capacity,
        price_per_km,
    }
}

impl MemoryStore {
    pub(crate) fn seeded() -> Self {
        Self {
            locations: vec![
                location(
                    "Самарканд",
                    LocationCategory::City,
                    Some((39.6542, 66.9597)),
                ),
                location(
                    "Аэропорт",
                    LocationCategory::Airport,
                    Some((39.7005, 66.9838)),
                ),
                location(
                    "Вокзал",
                    LocationCategory::Station,
                    Some((39.6705, 66.9305)),
                ),
                location("Бухара", LocationCategory::City, Some((39.7747, 64.4286))),
                location("Регистан", LocationCategory::Attraction, None),
            ],
            routes: vec![
                route("Самарканд", "Аэропорт", 15.0, 25, 150_000),
                route("Вокзал", "Аэропорт", 5.0, 10, 8_000),
            ],
            vehicles: vec![
                vehicle(VehicleClass::Sedan, "Седан", 3, 2_000),
                vehicle(VehicleClass::Premium, "Премиум", 3, 3_500),
                vehicle(VehicleClass::Minivan, "Минивэн", 6, 2_500),
                vehicle(VehicleClass::Microbus, "Микроавтобус", 10, 3_000),
                vehicle(VehicleClass::Bus, "Автобус", 30, 5_000),
            ],
            bookings: Mutex::new(vec![]),
            next_booking_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LocationRepo for MemoryStore {
    async fn location(&self, id: Id<Location>) -> Result<WithId<Location>> {
        self.locations
            .iter()
            .find(|location| location.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn locations(&self) -> Result<Vec<WithId<Location>>> {
        Ok(self.locations.clone())
    }

    async fn location_by_name(
        &self,
        name: &str,
    ) -> Result<Option<WithId<Location>>> {
        Ok(self
            .locations
            .iter()
            .find(|location| location.content.name == name)
            .cloned())
    }

    async fn insert_location(&self, _location: Location) -> Result<WithId<Location>> {
        unimplemented!("the fixture registry is read-only")
    }
}

#[async_trait]
impl RouteRepo for MemoryStore {
    async fn route(&self, id: Id<Route>) -> Result<WithId<Route>> {
        self.routes
            .iter()
            .find(|route| route.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn routes(&self) -> Result<Vec<WithId<Route>>> {
        Ok(self.routes.clone())
    }

    async fn route_by_endpoints(
        &self,
        from: &Id<Location>,
        to: &Id<Location>,
    ) -> Result<Option<WithId<Route>>> {
        Ok(self
            .routes
            .iter()
            .find(|route| {
                route.content.from_location == *from
                    && route.content.to_location == *to
            })
            .cloned())
    }

    async fn insert_route(&self, _route: Route) -> Result<WithId<Route>> {
        unimplemented!("the fixture registry is read-only")
    }
}

#[async_trait]
impl VehicleTypeRepo for MemoryStore {
    async fn vehicle_by_class(&self, class: VehicleClass) -> Result<VehicleType> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.class == class)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn vehicles(&self) -> Result<Vec<VehicleType>> {
        Ok(self.vehicles.clone())
    }
}

#[async_trait]
impl BookingRepo for MemoryStore {
    async fn booking(&self, id: Id<Booking>) -> Result<WithId<Booking>> {
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .find(|booking| booking.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn bookings(&self) -> Result<Vec<WithId<Booking>>> {
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn insert_booking(&self, booking: Booking) -> Result<WithId<Booking>> {
        let id = Id::new(self.next_booking_id.fetch_add(1, Ordering::SeqCst));
        let entry = WithId::new(id, booking);
        self.bookings.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn set_booking_status(
        &self,
        id: Id<Booking>,
        status: BookingStatus,
    ) -> Result<WithId<Booking>> {
        let mut bookings = self.bookings.lock().unwrap();
        let entry = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(RegistryError::NotFound)?;
        entry.content.status = status;
        Ok(entry.clone())
    }
}
