//! Pending composition entity (database row mapping).

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{Composition, EventData};

/// Database row mapping for the compositions table.
#[derive(Debug, Clone, FromRow)]
pub struct CompositionEntity {
    pub user_id: Uuid,
    pub event_data: Value,
    pub created_at: DateTime<Utc>,
}

impl CompositionEntity {
    /// Decode the JSONB payload into the typed domain model.
    pub fn into_model(self) -> Result<Composition, serde_json::Error> {
        let event_data: EventData = serde_json::from_value(self.event_data)?;
        Ok(Composition {
            user_id: self.user_id,
            event_data,
            created_at: self.created_at,
        })
    }
}
