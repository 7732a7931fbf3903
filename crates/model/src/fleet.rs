use chrono::{DateTime, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// A trackable vehicle as the fleet provider reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FleetUnit {
    pub unit_id: u64,
    pub name: String,
}

/// Last known position of a fleet unit, vendor-agnostic.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub speed_kmh: Option<f64>,
    pub course: Option<u16>,
    pub recorded_at: DateTime<Utc>,
}

impl ExampleData for FleetUnit {
    fn example_data() -> Self {
        FleetUnit {
            unit_id: 734_211,
            name: "01 A 515 KA".to_owned(),
        }
    }
}

impl ExampleData for Position {
    fn example_data() -> Self {
        Position {
            latitude: 39.6542,
            longitude: 66.9597,
            speed_kmh: Some(42.0),
            course: Some(270),
            recorded_at: Utc.with_ymd_and_hms(2024, 9, 14, 6, 12, 40).unwrap(),
        }
    }
}
