//! Template catalog routes.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use domain::models::{Template, GENERAL_VARIANT};
use domain::services::merge_template_candidates;
use persistence::repositories::TemplateRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;

/// Query parameters for template matching.
#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub event_type: String,
    #[serde(default)]
    pub religious_type: Option<String>,
}

/// Response body for template matching.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesResponse {
    pub templates: Vec<Template>,
}

/// List active templates for an event type, variant-specific first.
///
/// Templates for the requested religious variant come first, followed by
/// the event type's general templates. Asking for the general variant
/// returns only general templates.
///
/// GET /api/v1/templates?event_type=wedding&religious_type=hindu
pub async fn list_templates(
    State(state): State<AppState>,
    _auth: UserAuth,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<TemplatesResponse>, ApiError> {
    let repo = TemplateRepository::new(state.pool.clone());

    let religious_type = query
        .religious_type
        .as_deref()
        .unwrap_or(GENERAL_VARIANT);

    let specific: Vec<Template> = repo
        .list_active(&query.event_type, religious_type)
        .await?
        .into_iter()
        .map(Template::from)
        .collect();

    let general: Vec<Template> = if religious_type == GENERAL_VARIANT {
        Vec::new()
    } else {
        repo.list_active(&query.event_type, GENERAL_VARIANT)
            .await?
            .into_iter()
            .map(Template::from)
            .collect()
    };

    let templates = merge_template_candidates(specific, general);

    Ok(Json(TemplatesResponse { templates }))
}
