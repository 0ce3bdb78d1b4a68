//! Event type catalog routes.

use axum::{extract::State, Json};
use serde::Serialize;

use domain::models::EventTypeDef;
use persistence::repositories::EventTypeRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;

/// Response body for the event type catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypesResponse {
    pub event_types: Vec<EventTypeDef>,
}

/// List the active event types in display order. Requires a session, the
/// catalog backs the authenticated composer screens.
///
/// GET /api/v1/event-types
pub async fn list_event_types(
    State(state): State<AppState>,
    _auth: UserAuth,
) -> Result<Json<EventTypesResponse>, ApiError> {
    let repo = EventTypeRepository::new(state.pool.clone());

    let event_types = repo
        .list_active()
        .await?
        .into_iter()
        .map(EventTypeDef::from)
        .collect();

    Ok(Json(EventTypesResponse { event_types }))
}
