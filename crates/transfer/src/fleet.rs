use std::{error, fmt, result};

use async_trait::async_trait;
use model::fleet::{FleetUnit, Position};

#[derive(Debug)]
pub enum FleetError {
    UnitNotFound,
    /// The provider knows the unit but has no position for it yet.
    NoPosition,
    Provider(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::UnitNotFound => write!(f, "fleet unit not found"),
            FleetError::NoPosition => write!(f, "no position reported yet"),
            FleetError::Provider(why) => write!(f, "fleet provider error: {}", why),
        }
    }
}

impl error::Error for FleetError {}

pub type Result<T> = result::Result<T, FleetError>;

/// Live vehicle lookup, injected into callers. Vendor crates implement this
/// over whatever session/query protocol their provider speaks.
#[async_trait]
pub trait FleetTracking {
    async fn units(&self) -> Result<Vec<FleetUnit>>;
    async fn unit_position(&self, unit_id: u64) -> Result<Position>;
}
