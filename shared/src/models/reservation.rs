//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// A reservation transitions `Confirmed -> Cancelled` exactly once and
/// never back. The store persists the status as an upper-case string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Canonical stored form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse a stored cell value. Historical rows are hand-edited, so the
    /// comparison is trimmed and case-insensitive; anything unrecognized
    /// yields `None`.
    pub fn parse(cell: &str) -> Option<Self> {
        let v = cell.trim();
        if v.eq_ignore_ascii_case("CONFIRMED") {
            Some(Self::Confirmed)
        } else if v.eq_ignore_ascii_case("CANCELLED") {
            Some(Self::Cancelled)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// 24h time, `HH:MM`
    pub time: String,
    /// Number of guests (1-50)
    pub party_size: u32,
    /// Guest name
    pub name: String,
    /// Contact phone, free-form
    pub phone: String,
    /// Special requests
    pub notes: Option<String>,
}

/// Cancel reservation payload
///
/// `name` is the optional secondary key used to disambiguate when several
/// confirmed reservations share date, time, and phone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCancel {
    pub date: String,
    pub time: String,
    pub phone: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_tolerates_case_and_whitespace() {
        assert_eq!(
            ReservationStatus::parse(" confirmed "),
            Some(ReservationStatus::Confirmed)
        );
        assert_eq!(
            ReservationStatus::parse("Cancelled"),
            Some(ReservationStatus::Cancelled)
        );
        assert_eq!(ReservationStatus::parse("no-show"), None);
        assert_eq!(ReservationStatus::parse(""), None);
    }

    #[test]
    fn test_status_serialize_upper_case() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
    }

    #[test]
    fn test_cancel_payload_deserialize_without_name() {
        let json = r#"{"date":"2025-11-25","time":"19:00","phone":"010-1111-2222"}"#;
        let req: ReservationCancel = serde_json::from_str(json).unwrap();
        assert_eq!(req.date, "2025-11-25");
        assert!(req.name.is_none());
    }
}
