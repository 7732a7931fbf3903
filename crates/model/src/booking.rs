use chrono::{DateTime, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{location::Location, tariff::CURRENCY, vehicle::VehicleClass, ExampleData};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Allowed lifecycle steps. Completed and cancelled bookings are final.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, InProgress)
                | (Confirmed, Cancelled)
                | (InProgress, Completed)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBookingStatusError {
    pub raw: String,
}

impl std::fmt::Display for ParseBookingStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown booking status: {}", self.raw)
    }
}

impl std::error::Error for ParseBookingStatusError {}

impl std::str::FromStr for BookingStatus {
    type Err = ParseBookingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "in_progress" => Ok(BookingStatus::InProgress),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(ParseBookingStatusError { raw: s.to_owned() }),
        }
    }
}

/// A confirmed trip request with the price that was quoted at creation time.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub passenger_name: String,
    pub telegram_user_id: Option<i64>,
    pub phone: Option<String>,
    pub from_location: Id<Location>,
    pub to_location: Id<Location>,
    pub vehicle_class: VehicleClass,
    pub pickup_at: DateTime<Utc>,
    pub total_price: i64,
    pub currency: String,
    pub status: BookingStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HasId for Booking {
    type IdType = i64;
}

impl ExampleData for Booking {
    fn example_data() -> Self {
        Booking {
            passenger_name: "Азиз".to_owned(),
            telegram_user_id: Some(433_512_765),
            phone: Some("+998901234567".to_owned()),
            from_location: Id::from_name("Самарканд"),
            to_location: Id::from_name("Аэропорт Самарканд"),
            vehicle_class: VehicleClass::Sedan,
            pickup_at: Utc.with_ymd_and_hms(2024, 9, 14, 6, 30, 0).unwrap(),
            total_price: 150_000,
            currency: CURRENCY.to_owned(),
            status: BookingStatus::Pending,
            comment: None,
            created_at: Utc.with_ymd_and_hms(2024, 9, 13, 18, 2, 11).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BookingStatus::*;

    #[test]
    fn pending_can_be_confirmed_or_cancelled() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(InProgress));
    }

    #[test]
    fn final_states_allow_nothing() {
        for next in [Pending, Confirmed, InProgress, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn no_status_transitions_to_itself() {
        for status in [Pending, Confirmed, InProgress, Completed, Cancelled] {
            assert!(!status.can_transition_to(status));
        }
    }
}
