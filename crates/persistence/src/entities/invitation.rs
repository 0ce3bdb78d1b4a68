//! Invitation entity (database row mapping).

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{EventData, Invitation};

/// Database row mapping for the invitations table.
///
/// `event_data` and `gallery_images` are raw JSONB; decoding into the
/// typed payload happens in [`InvitationEntity::into_model`] because a
/// row written by an older schema revision may fail to decode.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_type: String,
    pub religious_type: String,
    pub template_id: i32,
    pub event_data: Value,
    pub family_name: Option<String>,
    pub main_image: Option<String>,
    pub gallery_images: Value,
    pub share_token: String,
    pub view_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl InvitationEntity {
    /// Decode the JSONB columns into the typed domain model.
    pub fn into_model(self) -> Result<Invitation, serde_json::Error> {
        let event_data: EventData = serde_json::from_value(self.event_data)?;
        let gallery_images: Vec<String> = serde_json::from_value(self.gallery_images)?;
        Ok(Invitation {
            id: self.id,
            user_id: self.user_id,
            event_type: self.event_type,
            religious_type: self.religious_type,
            template_id: self.template_id,
            event_data,
            family_name: self.family_name,
            main_image: self.main_image,
            gallery_images,
            share_token: self.share_token,
            view_count: self.view_count,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}
