//! Guest responses and their aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A single guest reply to a published invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: Uuid,
    pub invitation_id: Uuid,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub response: RsvpResponse,
    pub guest_count: i32,
    pub message: Option<String>,
    pub responded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpResponse {
    Yes,
    No,
    Maybe,
}

impl RsvpResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpResponse::Yes => "yes",
            RsvpResponse::No => "no",
            RsvpResponse::Maybe => "maybe",
        }
    }
}

impl fmt::Display for RsvpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid RSVP response: {0}")]
pub struct InvalidRsvpResponse(pub String);

impl FromStr for RsvpResponse {
    type Err = InvalidRsvpResponse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(RsvpResponse::Yes),
            "no" => Ok(RsvpResponse::No),
            "maybe" => Ok(RsvpResponse::Maybe),
            other => Err(InvalidRsvpResponse(other.to_string())),
        }
    }
}

/// Aggregated counts for an invitation's management view.
///
/// `total_guests` sums `guest_count` over the confirmed ("yes") replies
/// only; declines and maybes do not contribute seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStats {
    pub total: i64,
    pub yes: i64,
    pub no: i64,
    pub maybe: i64,
    pub total_guests: i64,
}

impl RsvpStats {
    pub fn from_rsvps(rsvps: &[Rsvp]) -> Self {
        let mut stats = RsvpStats {
            total: rsvps.len() as i64,
            ..Default::default()
        };
        for rsvp in rsvps {
            match rsvp.response {
                RsvpResponse::Yes => {
                    stats.yes += 1;
                    stats.total_guests += i64::from(rsvp.guest_count);
                }
                RsvpResponse::No => stats.no += 1,
                RsvpResponse::Maybe => stats.maybe += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsvp(response: RsvpResponse, guest_count: i32) -> Rsvp {
        Rsvp {
            id: Uuid::new_v4(),
            invitation_id: Uuid::new_v4(),
            guest_name: "Guest".into(),
            guest_email: None,
            guest_phone: None,
            response,
            guest_count,
            message: None,
            responded_at: Utc::now(),
        }
    }

    #[test]
    fn parses_and_prints_responses() {
        for s in ["yes", "no", "maybe"] {
            assert_eq!(RsvpResponse::from_str(s).unwrap().as_str(), s);
        }
        assert!(RsvpResponse::from_str("definitely").is_err());
    }

    #[test]
    fn serde_uses_lowercase_form() {
        assert_eq!(
            serde_json::to_string(&RsvpResponse::Maybe).unwrap(),
            "\"maybe\""
        );
        let r: RsvpResponse = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(r, RsvpResponse::No);
    }

    #[test]
    fn stats_only_count_confirmed_guests() {
        let rsvps = vec![
            rsvp(RsvpResponse::Yes, 3),
            rsvp(RsvpResponse::Yes, 1),
            rsvp(RsvpResponse::No, 5),
            rsvp(RsvpResponse::Maybe, 2),
        ];
        let stats = RsvpStats::from_rsvps(&rsvps);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.yes, 2);
        assert_eq!(stats.no, 1);
        assert_eq!(stats.maybe, 1);
        assert_eq!(stats.total_guests, 4);
    }

    #[test]
    fn stats_for_no_replies_are_zero() {
        assert_eq!(RsvpStats::from_rsvps(&[]), RsvpStats::default());
    }
}
