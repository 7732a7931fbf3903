use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::{route::Route, vehicle::VehicleClass, ExampleData};

pub const CURRENCY: &str = "UZS";

/// One line of a quote's price breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub label: String,
    pub amount: i64,
}

impl BreakdownLine {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// The computed price for one trip request. Built per request, never stored.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TariffQuote {
    pub route_id: Option<Id<Route>>,
    pub vehicle_class: VehicleClass,
    pub base_price: i64,
    pub price_per_km: i64,
    pub distance_km: f64,
    pub duration_minutes: Option<i32>,
    pub total_price: i64,
    pub currency: String,
    pub breakdown: Vec<BreakdownLine>,
}

impl TariffQuote {
    /// Sum of the breakdown lines. Always equals `total_price`.
    pub fn breakdown_total(&self) -> i64 {
        self.breakdown.iter().map(|line| line.amount).sum()
    }
}

impl ExampleData for TariffQuote {
    fn example_data() -> Self {
        TariffQuote {
            route_id: Some(Id::new("samarkand--aeroport-samarkand".to_owned())),
            vehicle_class: VehicleClass::Sedan,
            base_price: 150_000,
            price_per_km: 2_000,
            distance_km: 15.0,
            duration_minutes: Some(25),
            total_price: 150_000,
            currency: CURRENCY.to_owned(),
            breakdown: vec![BreakdownLine::new("Base fare", 150_000)],
        }
    }
}
