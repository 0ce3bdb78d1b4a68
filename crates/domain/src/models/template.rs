//! Invitation template catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A design from the template catalog.
///
/// `religious_type` is either a specific variant (`hindu`, `muslim`,
/// `christian`) or `general`, which suits every audience. The visual
/// attributes (style, colors, fonts, emoji) are opaque to the backend;
/// the frontend interprets them when rendering the chosen view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
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

#[cfg(test)]
pub(crate) fn template_fixture(id: i32, event_type: &str, religious_type: &str) -> Template {
    Template {
        id,
        name: format!("Template {id}"),
        description: None,
        event_type: event_type.to_string(),
        religious_type: religious_type.to_string(),
        style: None,
        color_scheme: None,
        font_family: None,
        emoji_theme: None,
        preview_image: None,
        is_active: true,
        usage_count: 0,
        created_at: Utc::now(),
    }
}
