//! Event type catalog entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the event_types table.
#[derive(Debug, Clone, FromRow)]
pub struct EventTypeEntity {
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

impl From<EventTypeEntity> for domain::models::EventTypeDef {
    fn from(entity: EventTypeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            display_name: entity.display_name,
            description: entity.description,
            icon: entity.icon,
            color: entity.color,
            is_active: entity.is_active,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
        }
    }
}
