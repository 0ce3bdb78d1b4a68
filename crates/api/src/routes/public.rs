//! Public invitation routes, reachable without a session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use domain::models::{EventData, Invitation, Rsvp, RsvpResponse, Template};
use domain::services::resolve_view;
use persistence::repositories::{InvitationRepository, NewRsvp, RsvpRepository, TemplateRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// Response body for a rendered public invitation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicInvitationResponse {
    /// Presentation view key the frontend renders with.
    pub view: String,
    pub event_data: EventData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    pub invitation: Invitation,
}

fn default_guest_count() -> u32 {
    1
}

/// Request body for a guest reply. Field bounds mirror the rsvps columns.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    #[validate(length(min = 1, max = 100, message = "Guest name must be 1-100 characters"))]
    pub guest_name: String,
    #[validate(
        email(message = "Invalid email address"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub guest_email: Option<String>,
    #[validate(length(max = 15, message = "Phone number must be at most 15 characters"))]
    pub guest_phone: Option<String>,
    pub response: String,
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
    pub message: Option<String>,
}

/// Response body after recording a guest reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpResponseBody {
    pub message: String,
    pub rsvp: Rsvp,
}

/// Render a published invitation by its share token.
///
/// The view count bump is fire-and-forget; a failed bump never blocks the
/// render. The presentation view keys off the template's type fields when
/// the template still resolves, and falls back to the invitation's own
/// copies when it does not.
///
/// GET /api/v1/i/:share_token
pub async fn view_invitation(
    State(state): State<AppState>,
    Path(share_token): Path<String>,
) -> Result<Json<PublicInvitationResponse>, ApiError> {
    let invitations = InvitationRepository::new(state.pool.clone());
    let templates = TemplateRepository::new(state.pool.clone());

    let invitation = invitations
        .find_active_by_token(&share_token)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invitation not found".to_string()))?
        .into_model()
        .map_err(|e| ApiError::Internal(format!("Stored invitation is malformed: {}", e)))?;

    let counter = invitations.clone();
    let invitation_id = invitation.id;
    tokio::spawn(async move {
        if let Err(e) = counter.increment_view_count(invitation_id).await {
            tracing::warn!(
                invitation_id = %invitation_id,
                error = %e,
                "Failed to bump view count"
            );
        }
    });

    let template = templates
        .find_by_id(invitation.template_id)
        .await?
        .map(Template::from);

    let view = match &template {
        Some(t) => resolve_view(&t.event_type, &t.religious_type),
        None => {
            tracing::warn!(
                invitation_id = %invitation.id,
                template_id = invitation.template_id,
                "Template no longer resolves, rendering from invitation fields"
            );
            resolve_view(&invitation.event_type, &invitation.religious_type)
        }
    };

    Ok(Json(PublicInvitationResponse {
        view: view.key().to_string(),
        event_data: invitation.event_data.clone(),
        template,
        invitation,
    }))
}

/// Record a guest reply against a published invitation.
///
/// POST /api/v1/i/:share_token/rsvp
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Path(share_token): Path<String>,
    Json(request): Json<RsvpRequest>,
) -> Result<(StatusCode, Json<RsvpResponseBody>), ApiError> {
    request.validate()?;

    let response = RsvpResponse::from_str(&request.response)
        .map_err(|_| ApiError::InvalidResponse("Response must be yes, no or maybe".to_string()))?;

    let invitations = InvitationRepository::new(state.pool.clone());
    let rsvps = RsvpRepository::new(state.pool.clone());

    let invitation = invitations
        .find_active_by_token(&share_token)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invitation not found".to_string()))?;

    let new = NewRsvp {
        invitation_id: invitation.id,
        guest_name: request.guest_name,
        guest_email: request.guest_email,
        guest_phone: request.guest_phone,
        response: response.as_str().to_string(),
        guest_count: request.guest_count.min(i32::MAX as u32) as i32,
        message: request.message,
    };

    let rsvp = Rsvp::try_from(rsvps.create(&new).await?)
        .map_err(|e| ApiError::Internal(format!("Stored RSVP is malformed: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        Json(RsvpResponseBody {
            message: "Thanks, your reply has been recorded.".to_string(),
            rsvp,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_request_defaults_guest_count() {
        let json = r#"{"guestName": "Guest", "response": "yes"}"#;
        let request: RsvpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.guest_count, 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rsvp_request_rejects_empty_name() {
        let json = r#"{"guestName": "", "response": "yes"}"#;
        let request: RsvpRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn rsvp_request_rejects_bad_email() {
        let json = r#"{"guestName": "Guest", "guestEmail": "nope", "response": "maybe"}"#;
        let request: RsvpRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn rsvp_request_rejects_overlong_phone() {
        let json = format!(
            r#"{{"guestName": "Guest", "guestPhone": "{}", "response": "yes"}}"#,
            "9".repeat(16)
        );
        let request: RsvpRequest = serde_json::from_str(&json).unwrap();
        assert!(request.validate().is_err());

        let json = format!(
            r#"{{"guestName": "Guest", "guestPhone": "{}", "response": "yes"}}"#,
            "9".repeat(15)
        );
        let request: RsvpRequest = serde_json::from_str(&json).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rsvp_request_rejects_overlong_email() {
        let json = format!(
            r#"{{"guestName": "Guest", "guestEmail": "{}@example.com", "response": "yes"}}"#,
            "a".repeat(120)
        );
        let request: RsvpRequest = serde_json::from_str(&json).unwrap();
        assert!(request.validate().is_err());
    }
}
