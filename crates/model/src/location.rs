use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::ExampleData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum LocationCategory {
    City,
    Airport,
    Station,
    Attraction,
}

impl LocationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCategory::City => "city",
            LocationCategory::Airport => "airport",
            LocationCategory::Station => "station",
            LocationCategory::Attraction => "attraction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocationCategoryError {
    pub raw: String,
}

impl std::fmt::Display for ParseLocationCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown location category: {}", self.raw)
    }
}

impl std::error::Error for ParseLocationCategoryError {}

impl std::str::FromStr for LocationCategory {
    type Err = ParseLocationCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(LocationCategory::City),
            "airport" => Ok(LocationCategory::Airport),
            "station" => Ok(LocationCategory::Station),
            "attraction" => Ok(LocationCategory::Attraction),
            _ => Err(ParseLocationCategoryError { raw: s.to_owned() }),
        }
    }
}

/// A named pickup/dropoff point. Reference data, created by seed or admin
/// tooling and matched by exact display name.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub category: LocationCategory,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl HasId for Location {
    type IdType = String;
}

impl ExampleData for Location {
    fn example_data() -> Self {
        Location {
            name: "Аэропорт Самарканд".to_owned(),
            category: LocationCategory::Airport,
            latitude: Some(39.7005),
            longitude: Some(66.9838),
        }
    }
}
