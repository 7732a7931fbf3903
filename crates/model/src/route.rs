use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{location::Location, ExampleData};

/// A directed pair of locations with a fixed distance and a fixed price for
/// the reference vehicle class. A city pair has two rows, one per direction;
/// no two routes share the same (from, to) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub from_location: Id<Location>,
    pub to_location: Id<Location>,
    pub distance_km: f64,
    pub duration_minutes: i32,
    /// Fixed price for the reference class, in the smallest currency unit.
    pub base_price: i64,
}

impl HasId for Route {
    type IdType = String;
}

impl Route {
    /// Stable route id derived from its endpoints.
    pub fn derive_id(from: &Id<Location>, to: &Id<Location>) -> Id<Route> {
        Id::new(format!("{}--{}", from, to))
    }
}

impl ExampleData for Route {
    fn example_data() -> Self {
        Route {
            from_location: Id::from_name("Самарканд"),
            to_location: Id::from_name("Аэропорт Самарканд"),
            distance_km: 15.0,
            duration_minutes: 25,
            base_price: 150_000,
        }
    }
}
