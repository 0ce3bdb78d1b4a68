//! RSVP entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use domain::models::{InvalidRsvpResponse, Rsvp, RsvpResponse};

/// Database row mapping for the rsvps table.
#[derive(Debug, Clone, FromRow)]
pub struct RsvpEntity {
    pub id: Uuid,
    pub invitation_id: Uuid,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub response: String,
    pub guest_count: i32,
    pub message: Option<String>,
    pub responded_at: DateTime<Utc>,
}

impl TryFrom<RsvpEntity> for Rsvp {
    type Error = InvalidRsvpResponse;

    fn try_from(entity: RsvpEntity) -> Result<Self, Self::Error> {
        // A CHECK constraint keeps the column in {yes, no, maybe}.
        let response = RsvpResponse::from_str(&entity.response)?;
        Ok(Self {
            id: entity.id,
            invitation_id: entity.invitation_id,
            guest_name: entity.guest_name,
            guest_email: entity.guest_email,
            guest_phone: entity.guest_phone,
            response,
            guest_count: entity.guest_count,
            message: entity.message,
            responded_at: entity.responded_at,
        })
    }
}
