//! Template catalog entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the templates table.
#[derive(Debug, Clone, FromRow)]
pub struct TemplateEntity {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub event_type: String,
    pub religious_type: String,
    pub style: Option<String>,
    pub color_scheme: Option<String>,
    pub font_family: Option<String>,
    pub emoji_theme: Option<String>,
    pub preview_image: Option<String>,
    pub is_active: bool,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<TemplateEntity> for domain::models::Template {
    fn from(entity: TemplateEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            event_type: entity.event_type,
            religious_type: entity.religious_type,
            style: entity.style,
            color_scheme: entity.color_scheme,
            font_family: entity.font_family,
            emoji_theme: entity.emoji_theme,
            preview_image: entity.preview_image,
            is_active: entity.is_active,
            usage_count: entity.usage_count,
            created_at: entity.created_at,
        }
    }
}
