//! Default registry content for a fresh database. The booking flow is
//! useless without locations and a vehicle catalog, so `connect`-time setup
//! installs these once; admin tooling owns them afterwards.

use model::{
    location::{Location, LocationCategory},
    route::Route,
    vehicle::{VehicleClass, VehicleType},
};
use transfer::registry::{LocationRepo, Result, RouteRepo};
use utility::id::Id;

use crate::{queries, PgStore};

pub async fn ensure_defaults(store: &PgStore) -> Result<()> {
    // the catalog has a fixed shape; missing classes are always filled in
    for vehicle in default_vehicle_types() {
        queries::vehicle::upsert(&store.pool, &vehicle).await?;
    }

    if !store.locations().await?.is_empty() {
        return Ok(());
    }

    log::info!("empty registry, installing default locations and routes");
    for location in default_locations() {
        store.insert_location(location).await?;
    }
    for &(from, to, distance_km, duration_minutes, base_price) in DEFAULT_ROUTES {
        store
            .insert_route(Route {
                from_location: Id::from_name(from),
                to_location: Id::from_name(to),
                distance_km,
                duration_minutes,
                base_price,
            })
            .await?;
    }
    Ok(())
}

fn default_vehicle_types() -> Vec<VehicleType> {
    vec![
        VehicleType {
            class: VehicleClass::Sedan,
            display_name: "Седан".to_owned(),
            capacity: 3,
            price_per_km: 2_000,
        },
        VehicleType {
            class: VehicleClass::Premium,
            display_name: "Премиум".to_owned(),
            capacity: 3,
            price_per_km: 3_500,
        },
        VehicleType {
            class: VehicleClass::Minivan,
            display_name: "Минивэн".to_owned(),
            capacity: 6,
            price_per_km: 2_500,
        },
        VehicleType {
            class: VehicleClass::Microbus,
            display_name: "Микроавтобус".to_owned(),
            capacity: 10,
            price_per_km: 3_000,
        },
        VehicleType {
            class: VehicleClass::Bus,
            display_name: "Автобус".to_owned(),
            capacity: 30,
            price_per_km: 5_000,
        },
    ]
}

fn default_locations() -> Vec<Location> {
    fn location(
        name: &str,
        category: LocationCategory,
        latitude: f64,
        longitude: f64,
    ) -> Location {
        Location {
            name: name.to_owned(),
            category,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    vec![
        location("Самарканд", LocationCategory::City, 39.6542, 66.9597),
        location(
            "Аэропорт Самарканд",
            LocationCategory::Airport,
            39.7005,
            66.9838,
        ),
        location(
            "Ж/д вокзал Самарканд",
            LocationCategory::Station,
            39.6705,
            66.9305,
        ),
        location("Регистан", LocationCategory::Attraction, 39.6547, 66.9758),
        location("Шахрисабз", LocationCategory::City, 39.0578, 66.8344),
        location("Бухара", LocationCategory::City, 39.7747, 64.4286),
        location("Ташкент", LocationCategory::City, 41.2995, 69.2401),
    ]
}

/// (from, to, distance_km, duration_minutes, base_price)
const DEFAULT_ROUTES: &[(&str, &str, f64, i32, i64)] = &[
    ("Самарканд", "Аэропорт Самарканд", 15.0, 25, 150_000),
    ("Аэропорт Самарканд", "Самарканд", 15.0, 25, 150_000),
    ("Самарканд", "Ж/д вокзал Самарканд", 6.0, 15, 60_000),
    ("Ж/д вокзал Самарканд", "Самарканд", 6.0, 15, 60_000),
    ("Самарканд", "Шахрисабз", 88.0, 90, 700_000),
    ("Шахрисабз", "Самарканд", 88.0, 90, 700_000),
    ("Самарканд", "Бухара", 270.0, 240, 1_500_000),
    ("Бухара", "Самарканд", 270.0, 240, 1_500_000),
    ("Самарканд", "Ташкент", 300.0, 270, 1_700_000),
    ("Ташкент", "Самарканд", 300.0, 270, 1_700_000),
];
