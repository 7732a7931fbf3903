use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// The fixed set of bookable vehicle classes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleClass {
    Sedan,
    Premium,
    Minivan,
    Microbus,
    Bus,
}

impl VehicleClass {
    /// The class a route's fixed price is quoted for.
    pub const REFERENCE: VehicleClass = VehicleClass::Sedan;

    pub fn all() -> [VehicleClass; 5] {
        [
            VehicleClass::Sedan,
            VehicleClass::Premium,
            VehicleClass::Minivan,
            VehicleClass::Microbus,
            VehicleClass::Bus,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "SEDAN",
            VehicleClass::Premium => "PREMIUM",
            VehicleClass::Minivan => "MINIVAN",
            VehicleClass::Microbus => "MICROBUS",
            VehicleClass::Bus => "BUS",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVehicleClassError {
    pub raw: String,
}

impl fmt::Display for ParseVehicleClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vehicle class: {}", self.raw)
    }
}

impl std::error::Error for ParseVehicleClassError {}

impl FromStr for VehicleClass {
    type Err = ParseVehicleClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::all()
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVehicleClassError { raw: s.to_owned() })
    }
}

/// Catalog entry for a vehicle class: seating capacity and per-kilometer rate
/// in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    pub class: VehicleClass,
    pub display_name: String,
    pub capacity: u32,
    pub price_per_km: i64,
}

impl ExampleData for VehicleType {
    fn example_data() -> Self {
        VehicleType {
            class: VehicleClass::Sedan,
            display_name: "Седан".to_owned(),
            capacity: 3,
            price_per_km: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_names() {
        assert_eq!("SEDAN".parse::<VehicleClass>(), Ok(VehicleClass::Sedan));
        assert_eq!("minivan".parse::<VehicleClass>(), Ok(VehicleClass::Minivan));
    }

    #[test]
    fn rejects_unknown_class_names() {
        let error = "NOT_A_TYPE".parse::<VehicleClass>().unwrap_err();
        assert_eq!(error.raw, "NOT_A_TYPE");
    }
}
