use chrono::DateTime;
use model::fleet::{FleetUnit, Position};
use serde::Deserialize;

/// Base unit properties.
pub const FLAG_BASE: u64 = 0x1;
/// Last known position.
pub const FLAG_POSITION: u64 = 0x400;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session id, sent as `sid` on every following call.
    pub eid: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub nm: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItemsResponse {
    #[serde(default)]
    pub items: Vec<UnitData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItemResponse {
    pub item: Option<UnitData>,
}

/// A unit as the vendor reports it: short field names, position optional
/// until the tracker has sent a message.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitData {
    pub id: u64,
    pub nm: String,
    #[serde(default)]
    pub pos: Option<RawPosition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPosition {
    /// Unix timestamp of the message.
    pub t: i64,
    /// Latitude.
    pub y: f64,
    /// Longitude.
    pub x: f64,
    /// Speed in km/h.
    #[serde(default)]
    pub s: Option<f64>,
    /// Course in degrees.
    #[serde(default)]
    pub c: Option<u16>,
}

impl UnitData {
    pub fn to_unit(&self) -> FleetUnit {
        FleetUnit {
            unit_id: self.id,
            name: self.nm.clone(),
        }
    }
}

impl RawPosition {
    pub fn to_position(&self) -> Position {
        Position {
            latitude: self.y,
            longitude: self.x,
            speed_kmh: self.s,
            course: self.c,
            recorded_at: DateTime::from_timestamp(self.t, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn parses_login_response() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"eid":"0f3a6b2d4c5e6f70","user":{"nm":"stc-transfer","id":42}}"#,
        )
        .unwrap();
        assert_eq!(response.eid, "0f3a6b2d4c5e6f70");
        assert_eq!(response.user.unwrap().nm, "stc-transfer");
    }

    #[test]
    fn parses_unit_with_position() {
        let unit: UnitData = serde_json::from_str(
            r#"{
                "id": 734211,
                "nm": "01 A 515 KA",
                "pos": {"t": 1726294360, "y": 39.6542, "x": 66.9597, "s": 42, "c": 270}
            }"#,
        )
        .unwrap();

        let position = unit.pos.as_ref().unwrap().to_position();
        assert_eq!(position.latitude, 39.6542);
        assert_eq!(position.longitude, 66.9597);
        assert_eq!(position.speed_kmh, Some(42.0));
        assert_eq!(position.course, Some(270));
        assert_eq!(
            position.recorded_at,
            Utc.timestamp_opt(1_726_294_360, 0).unwrap()
        );
        assert_eq!(unit.to_unit().name, "01 A 515 KA");
    }

    #[test]
    fn parses_unit_without_position() {
        let unit: UnitData =
            serde_json::from_str(r#"{"id": 734212, "nm": "01 B 007 XB"}"#).unwrap();
        assert!(unit.pos.is_none());
    }

    #[test]
    fn ignores_extra_position_fields() {
        let position: RawPosition = serde_json::from_str(
            r#"{"t": 1726294360, "y": 39.7, "x": 66.98, "z": 720, "sc": 255}"#,
        )
        .unwrap();
        assert_eq!(position.s, None);
        assert_eq!(position.c, None);
    }
}
