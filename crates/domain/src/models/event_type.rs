//! Event type identifiers and catalog metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The religious variant every event type falls back to when no tailored
/// template exists.
pub const GENERAL_VARIANT: &str = "general";

/// The six supported event types.
///
/// The stable string form (`wedding`, `birthday`, ...) is what templates
/// and invitations carry in the store; this enum exists so the payload
/// schema and view resolution can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Birthday,
    Anniversary,
    Babyshower,
    Graduation,
    Retirement,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Birthday => "birthday",
            EventType::Anniversary => "anniversary",
            EventType::Babyshower => "babyshower",
            EventType::Graduation => "graduation",
            EventType::Retirement => "retirement",
        }
    }

    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Birthday,
        EventType::Anniversary,
        EventType::Babyshower,
        EventType::Graduation,
        EventType::Retirement,
    ];
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized event type string.
#[derive(Debug, Clone, Error)]
#[error("Unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wedding" => Ok(EventType::Wedding),
            "birthday" => Ok(EventType::Birthday),
            "anniversary" => Ok(EventType::Anniversary),
            "babyshower" => Ok(EventType::Babyshower),
            "graduation" => Ok(EventType::Graduation),
            "retirement" => Ok(EventType::Retirement),
            other => Err(UnknownEventType(other.to_string())),
        }
    }
}

/// Catalog row describing one event type for the composer UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeDef {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for et in EventType::ALL {
            assert_eq!(EventType::from_str(et.as_str()).unwrap(), et);
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let err = EventType::from_str("housewarming").unwrap_err();
        assert!(err.to_string().contains("housewarming"));
    }

    #[test]
    fn serde_uses_lowercase_form() {
        assert_eq!(
            serde_json::to_string(&EventType::Babyshower).unwrap(),
            "\"babyshower\""
        );
        let et: EventType = serde_json::from_str("\"wedding\"").unwrap();
        assert_eq!(et, EventType::Wedding);
    }
}
