//! Published invitation model and the pending composition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event_data::EventData;

/// A published invitation, reachable by its share token.
///
/// `event_type`, `religious_type`, `family_name` and the image
/// references are denormalized copies of what the payload carried at
/// publish time; `template_id` is a weak reference that may no longer
/// resolve when the invitation is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_type: String,
    pub religious_type: String,
    pub template_id: i32,
    pub event_data: EventData,
    pub family_name: Option<String>,
    pub main_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub share_token: String,
    pub view_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// The draft a user builds up before publishing. One per user; composing
/// again replaces it, publishing deletes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub user_id: Uuid,
    pub event_data: EventData,
    pub created_at: DateTime<Utc>,
}
