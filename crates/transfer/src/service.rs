use model::{
    booking::{Booking, BookingStatus},
    location::Location,
    route::Route,
    tariff::TariffQuote,
    vehicle::VehicleType,
    WithId,
};
use utility::id::Id;

use crate::{
    booking::{self, NewBooking},
    registry::Store,
    stats::{self, BookingStats},
    tariff::{self, QuoteRequest},
    RequestError, RequestResult,
};

/// The one entry point the API surface talks to. Stateless apart from the
/// injected store handle.
#[derive(Clone)]
pub struct TransferService<S> {
    store: S,
}

impl<S: Store> TransferService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn quote(&self, request: &QuoteRequest) -> RequestResult<TariffQuote> {
        tariff::resolve(&self.store, request).await
    }

    // - locations -

    pub async fn locations(&self) -> RequestResult<Vec<WithId<Location>>> {
        self.store.locations().await.map_err(Into::into)
    }

    pub async fn location(
        &self,
        id: Id<Location>,
    ) -> RequestResult<WithId<Location>> {
        self.store.location(id).await.map_err(Into::into)
    }

    pub async fn add_location(
        &self,
        location: Location,
    ) -> RequestResult<WithId<Location>> {
        if location.name.trim().is_empty() {
            return Err(RequestError::invalid_argument(
                "location name must not be empty",
            ));
        }
        self.store.insert_location(location).await.map_err(Into::into)
    }

    // - routes -

    pub async fn routes(&self) -> RequestResult<Vec<WithId<Route>>> {
        self.store.routes().await.map_err(Into::into)
    }

    pub async fn route(&self, id: Id<Route>) -> RequestResult<WithId<Route>> {
        self.store.route(id).await.map_err(Into::into)
    }

    pub async fn add_route(&self, route: Route) -> RequestResult<WithId<Route>> {
        if route.from_location == route.to_location {
            return Err(RequestError::invalid_argument(
                "a route must connect two distinct locations",
            ));
        }
        if route.distance_km < 0.0 {
            return Err(RequestError::invalid_argument(
                "distance must not be negative",
            ));
        }
        if route.duration_minutes < 0 {
            return Err(RequestError::invalid_argument(
                "duration must not be negative",
            ));
        }
        if route.base_price <= 0 {
            return Err(RequestError::invalid_argument(
                "base price must be positive",
            ));
        }
        // both endpoints have to exist
        self.store.location(route.from_location.clone()).await?;
        self.store.location(route.to_location.clone()).await?;

        self.store.insert_route(route).await.map_err(Into::into)
    }

    // - vehicle catalog -

    pub async fn vehicles(&self) -> RequestResult<Vec<VehicleType>> {
        self.store.vehicles().await.map_err(Into::into)
    }

    // - bookings -

    pub async fn create_booking(
        &self,
        new: NewBooking,
    ) -> RequestResult<WithId<Booking>> {
        booking::create(&self.store, new).await
    }

    pub async fn bookings(&self) -> RequestResult<Vec<WithId<Booking>>> {
        self.store.bookings().await.map_err(Into::into)
    }

    pub async fn booking(&self, id: Id<Booking>) -> RequestResult<WithId<Booking>> {
        self.store.booking(id).await.map_err(Into::into)
    }

    pub async fn update_booking_status(
        &self,
        id: Id<Booking>,
        next: BookingStatus,
    ) -> RequestResult<WithId<Booking>> {
        booking::update_status(&self.store, id, next).await
    }

    // - admin -

    pub async fn booking_stats(&self) -> RequestResult<BookingStats> {
        stats::booking_stats(&self.store).await
    }
}

#[cfg(test)]
mod tests {
    use model::location::LocationCategory;

    use super::*;
    use crate::test_support::MemoryStore;

    fn service() -> TransferService<MemoryStore> {
        TransferService::new(MemoryStore::seeded())
    }

    fn route(from: &str, to: &str) -> Route {
        Route {
            from_location: Id::from_name(from),
            to_location: Id::from_name(to),
            distance_km: 12.0,
            duration_minutes: 20,
            base_price: 90_000,
        }
    }

    #[tokio::test]
    async fn route_endpoints_must_differ() {
        let result = service().add_route(route("Самарканд", "Самарканд")).await;
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn route_invariants_are_validated() {
        let mut negative_distance = route("Самарканд", "Бухара");
        negative_distance.distance_km = -1.0;
        let result = service().add_route(negative_distance).await;
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));

        let mut free_route = route("Самарканд", "Бухара");
        free_route.base_price = 0;
        let result = service().add_route(free_route).await;
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn route_endpoints_must_exist() {
        let result = service().add_route(route("Самарканд", "Ташкент")).await;
        assert!(matches!(result, Err(RequestError::NotFound)));
    }

    #[tokio::test]
    async fn blank_location_names_are_rejected() {
        let result = service()
            .add_location(Location {
                name: "   ".to_owned(),
                category: LocationCategory::City,
                latitude: None,
                longitude: None,
            })
            .await;
        assert!(matches!(result, Err(RequestError::InvalidArgument(_))));
    }
}
