use model::{
    location::Location,
    route::Route,
    tariff::{BreakdownLine, TariffQuote, CURRENCY},
    vehicle::{VehicleClass, VehicleType},
    WithId,
};
use utility::geo::haversine_distance;

use crate::{registry::Store, RequestError, RequestResult};

/// Distance assumed for an un-routed pair when the caller supplies no
/// estimate and neither location carries coordinates.
pub const DEFAULT_DISTANCE_KM: f64 = 25.0;

pub const BASE_FARE_LABEL: &str = "Base fare";
pub const SURCHARGE_LABEL: &str = "Vehicle class surcharge";

/// One trip to price. Names are matched exactly against the registry.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub from: String,
    pub to: String,
    pub vehicle_class: VehicleClass,
    /// Caller-side distance estimate, used only when no route is stored.
    pub distance_km: Option<f64>,
}

/// Prices a trip against the current registry state.
///
/// A stored route wins and fixes price and distance; anything else is quoted
/// distance-based from the vehicle class's per-km rate. Pure apart from the
/// registry reads: identical inputs over unchanged data give identical quotes.
pub async fn resolve<S>(store: &S, request: &QuoteRequest) -> RequestResult<TariffQuote>
where
    S: Store + ?Sized,
{
    if let Some(distance_km) = request.distance_km {
        if !(distance_km > 0.0) {
            return Err(RequestError::invalid_argument(
                "distance estimate must be positive",
            ));
        }
    }

    let from = store
        .location_by_name(&request.from)
        .await?
        .ok_or(RequestError::NotFound)?;
    let to = store
        .location_by_name(&request.to)
        .await?
        .ok_or(RequestError::NotFound)?;
    let vehicle = store.vehicle_by_class(request.vehicle_class).await?;

    let quote = match store.route_by_endpoints(&from.id, &to.id).await? {
        Some(route) => quote_for_route(&route, &vehicle),
        None => {
            let distance_km = request
                .distance_km
                .or_else(|| estimated_distance(&from.content, &to.content))
                .unwrap_or(DEFAULT_DISTANCE_KM);
            quote_for_distance(distance_km, &vehicle)
        }
    };
    Ok(quote)
}

fn estimated_distance(from: &Location, to: &Location) -> Option<f64> {
    let (from_lat, from_lon) = from.coordinates()?;
    let (to_lat, to_lon) = to.coordinates()?;
    Some(haversine_distance(from_lat, from_lon, to_lat, to_lon))
}

fn distance_total(distance_km: f64, vehicle: &VehicleType) -> i64 {
    (distance_km * vehicle.price_per_km as f64).round() as i64
}

/// Quote for a stored route: the fixed price, plus a surcharge line when a
/// non-reference class's distance-based total exceeds it. The surcharge is
/// clamped at zero, so a quote never drops below the route price.
pub fn quote_for_route(route: &WithId<Route>, vehicle: &VehicleType) -> TariffQuote {
    let base_price = route.content.base_price;
    let mut breakdown = vec![BreakdownLine::new(BASE_FARE_LABEL, base_price)];

    let total_price = if vehicle.class == VehicleClass::REFERENCE {
        base_price
    } else {
        let class_total = distance_total(route.content.distance_km, vehicle);
        let surcharge = (class_total - base_price).max(0);
        if surcharge > 0 {
            breakdown.push(BreakdownLine::new(SURCHARGE_LABEL, surcharge));
        }
        base_price + surcharge
    };

    TariffQuote {
        route_id: Some(route.id.clone()),
        vehicle_class: vehicle.class,
        base_price,
        price_per_km: vehicle.price_per_km,
        distance_km: route.content.distance_km,
        duration_minutes: Some(route.content.duration_minutes),
        total_price,
        currency: CURRENCY.to_owned(),
        breakdown,
    }
}

/// Distance-based quote for a pair with no stored route.
pub fn quote_for_distance(distance_km: f64, vehicle: &VehicleType) -> TariffQuote {
    let total_price = distance_total(distance_km, vehicle);
    TariffQuote {
        route_id: None,
        vehicle_class: vehicle.class,
        base_price: total_price,
        price_per_km: vehicle.price_per_km,
        distance_km,
        duration_minutes: None,
        total_price,
        currency: CURRENCY.to_owned(),
        breakdown: vec![BreakdownLine::new(BASE_FARE_LABEL, total_price)],
    }
}

#[cfg(test)]
mod tests {
    use model::vehicle::VehicleClass;

    use super::*;
    use crate::test_support::MemoryStore;

    fn request(from: &str, to: &str, class: VehicleClass) -> QuoteRequest {
        QuoteRequest {
            from: from.to_owned(),
            to: to.to_owned(),
            vehicle_class: class,
            distance_km: None,
        }
    }

    #[tokio::test]
    async fn stored_route_is_quoted_at_its_fixed_price() {
        let store = MemoryStore::seeded();
        let quote = resolve(
            &store,
            &request("Самарканд", "Аэропорт", VehicleClass::Sedan),
        )
        .await
        .unwrap();

        assert_eq!(quote.total_price, 150_000);
        assert_eq!(quote.base_price, 150_000);
        assert_eq!(quote.distance_km, 15.0);
        assert_eq!(quote.duration_minutes, Some(25));
        assert_eq!(quote.currency, "UZS");
        assert_eq!(
            quote.breakdown,
            vec![BreakdownLine::new(BASE_FARE_LABEL, 150_000)]
        );
    }

    #[tokio::test]
    async fn unrouted_pair_falls_back_to_distance_pricing() {
        let store = MemoryStore::seeded();
        // Only the Самарканд → Аэропорт direction is seeded.
        let mut request = request("Аэропорт", "Самарканд", VehicleClass::Sedan);
        request.distance_km = Some(15.0);

        let quote = resolve(&store, &request).await.unwrap();

        assert_eq!(quote.route_id, None);
        assert_eq!(quote.total_price, 15 * 2_000);
        assert_eq!(quote.duration_minutes, None);
    }

    #[tokio::test]
    async fn fallback_estimates_distance_from_coordinates() {
        let store = MemoryStore::seeded();
        let quote = resolve(
            &store,
            &request("Самарканд", "Бухара", VehicleClass::Sedan),
        )
        .await
        .unwrap();

        let expected_km = haversine_distance(39.6542, 66.9597, 39.7747, 64.4286);
        assert_eq!(quote.distance_km, expected_km);
        assert_eq!(
            quote.total_price,
            (expected_km * 2_000.0).round() as i64
        );
    }

    #[tokio::test]
    async fn fallback_uses_default_distance_without_coordinates() {
        let store = MemoryStore::seeded();
        let quote = resolve(
            &store,
            &request("Самарканд", "Регистан", VehicleClass::Sedan),
        )
        .await
        .unwrap();

        assert_eq!(quote.distance_km, DEFAULT_DISTANCE_KM);
        assert_eq!(
            quote.total_price,
            (DEFAULT_DISTANCE_KM * 2_000.0).round() as i64
        );
    }

    #[tokio::test]
    async fn unknown_location_is_not_found() {
        let store = MemoryStore::seeded();
        let result = resolve(
            &store,
            &request("Ташкент", "Аэропорт", VehicleClass::Sedan),
        )
        .await;
        assert!(matches!(result, Err(RequestError::NotFound)));
    }

    #[tokio::test]
    async fn location_names_match_case_sensitively() {
        let store = MemoryStore::seeded();
        let result = resolve(
            &store,
            &request("самарканд", "Аэропорт", VehicleClass::Sedan),
        )
        .await;
        assert!(matches!(result, Err(RequestError::NotFound)));
    }

    #[tokio::test]
    async fn non_positive_distance_estimate_is_rejected() {
        let store = MemoryStore::seeded();
        for bad in [0.0, -3.0] {
            let mut request =
                request("Аэропорт", "Самарканд", VehicleClass::Sedan);
            request.distance_km = Some(bad);
            let result = resolve(&store, &request).await;
            assert!(matches!(result, Err(RequestError::InvalidArgument(_))));
        }
    }

    #[tokio::test]
    async fn unparseable_vehicle_class_maps_to_invalid_argument() {
        let error = "NOT_A_TYPE".parse::<VehicleClass>().unwrap_err();
        assert!(matches!(
            RequestError::from(error),
            RequestError::InvalidArgument(_)
        ));
    }

    #[tokio::test]
    async fn cheap_class_surcharge_clamps_to_zero() {
        let store = MemoryStore::seeded();
        // Premium per-km total (15 km × 3500) stays below the fixed 150 000,
        // so the quote holds the route price and carries no surcharge line.
        let quote = resolve(
            &store,
            &request("Самарканд", "Аэропорт", VehicleClass::Premium),
        )
        .await
        .unwrap();

        assert_eq!(quote.total_price, 150_000);
        assert_eq!(quote.breakdown.len(), 1);
        assert_eq!(quote.breakdown_total(), quote.total_price);
    }

    #[tokio::test]
    async fn expensive_class_pays_the_surcharge() {
        let store = MemoryStore::seeded();
        // Вокзал → Аэропорт is seeded cheap: 5 km, fixed 8000. Premium at
        // 3500/km totals 17 500, so 9500 shows up as a surcharge line.
        let quote = resolve(
            &store,
            &request("Вокзал", "Аэропорт", VehicleClass::Premium),
        )
        .await
        .unwrap();

        assert_eq!(quote.base_price, 8_000);
        assert_eq!(quote.total_price, 17_500);
        assert_eq!(
            quote.breakdown,
            vec![
                BreakdownLine::new(BASE_FARE_LABEL, 8_000),
                BreakdownLine::new(SURCHARGE_LABEL, 9_500),
            ]
        );
        assert_eq!(quote.breakdown_total(), quote.total_price);
    }

    #[tokio::test]
    async fn breakdown_always_sums_to_total() {
        let store = MemoryStore::seeded();
        for class in VehicleClass::all() {
            let quote = resolve(&store, &request("Самарканд", "Аэропорт", class))
                .await
                .unwrap();
            assert_eq!(quote.breakdown_total(), quote.total_price);

            let quote = resolve(&store, &request("Аэропорт", "Бухара", class))
                .await
                .unwrap();
            assert_eq!(quote.breakdown_total(), quote.total_price);
        }
    }

    #[tokio::test]
    async fn identical_requests_give_identical_quotes() {
        let store = MemoryStore::seeded();
        let request = request("Самарканд", "Аэропорт", VehicleClass::Microbus);

        let first = resolve(&store, &request).await.unwrap();
        let second = resolve(&store, &request).await.unwrap();

        assert_eq!(first, second);
    }
}
