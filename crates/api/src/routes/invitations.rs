//! Invitation composition, publishing and owner-facing reads.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use domain::models::{Composition, EventData, Invitation, Rsvp, RsvpStats, Template};
use persistence::repositories::{
    CompositionRepository, InvitationRepository, NewInvitation, RsvpRepository,
    TemplateRepository,
};
use shared::tokens::generate_share_token;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;
use crate::services::blob::upload_filename;

/// Multipart field that carries gallery uploads.
const GALLERY_FIELD: &str = "galleryImages";

/// Response body after composing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeResponse {
    pub message: String,
    pub composition: Composition,
}

/// Request body for publishing the pending composition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub template_id: i32,
}

/// Response body after publishing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub invitation: Invitation,
    pub share_url: String,
}

/// Response body for the owner's invitation list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationListResponse {
    pub invitations: Vec<Invitation>,
}

/// Response body for a single owned invitation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDetailResponse {
    pub invitation: Invitation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    pub rsvps: Vec<Rsvp>,
    pub rsvp_stats: RsvpStats,
}

/// Compose (or replace) the caller's pending invitation.
///
/// Accepts a multipart form: text parts become event-data fields, file
/// parts are stored and replaced by their public upload paths. Gallery
/// files all arrive under the same field name and keep their order.
///
/// POST /api/v1/invitations/compose
pub async fn compose(
    State(state): State<AppState>,
    auth: UserAuth,
    mut multipart: Multipart,
) -> Result<Json<ComposeResponse>, ApiError> {
    let mut fields = serde_json::Map::new();
    let mut gallery: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = match field.name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        if let Some(original) = field.file_name().map(str::to_string) {
            if original.is_empty() {
                continue;
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("Failed to read upload: {}", e)))?;
            if bytes.is_empty() {
                continue;
            }

            let millis = Utc::now().timestamp_millis();
            let filename = if name == GALLERY_FIELD {
                upload_filename(
                    auth.user_id,
                    millis,
                    &format!("{}_{}", gallery.len(), original),
                )
            } else {
                upload_filename(auth.user_id, millis, &original)
            };

            let public_path = state
                .blob_store
                .put(&filename, &bytes)
                .await
                .map_err(|e| match e {
                    crate::services::blob::BlobError::TooLarge { .. }
                    | crate::services::blob::BlobError::InvalidFilename(_) => {
                        ApiError::Validation(e.to_string())
                    }
                    other => ApiError::Internal(format!("Upload storage failed: {}", other)),
                })?;

            if name == GALLERY_FIELD {
                gallery.push(public_path);
            } else {
                fields.insert(name, Value::String(public_path));
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::Validation(format!("Malformed field: {}", e)))?;
            fields.insert(name, Value::String(text));
        }
    }

    if !gallery.is_empty() {
        fields.insert(
            GALLERY_FIELD.to_string(),
            Value::Array(gallery.into_iter().map(Value::String).collect()),
        );
    }

    let event_data: EventData = serde_json::from_value(Value::Object(fields))
        .map_err(|e| ApiError::Validation(format!("Invalid event data: {}", e)))?;

    let raw = serde_json::to_value(&event_data)
        .map_err(|e| ApiError::Internal(format!("Failed to encode event data: {}", e)))?;

    let composition = CompositionRepository::new(state.pool.clone())
        .upsert(auth.user_id, &raw)
        .await?
        .into_model()
        .map_err(|e| ApiError::Internal(format!("Stored composition is malformed: {}", e)))?;

    Ok(Json(ComposeResponse {
        message: "Composition saved. Pick a template to publish.".to_string(),
        composition,
    }))
}

/// Publish the pending composition with a chosen template.
///
/// POST /api/v1/invitations/publish
pub async fn publish(
    State(state): State<AppState>,
    auth: UserAuth,
    Json(request): Json<PublishRequest>,
) -> Result<(StatusCode, Json<PublishResponse>), ApiError> {
    let compositions = CompositionRepository::new(state.pool.clone());
    let templates = TemplateRepository::new(state.pool.clone());
    let invitations = InvitationRepository::new(state.pool.clone());

    let composition = compositions
        .find_by_user(auth.user_id)
        .await?
        .ok_or(ApiError::NoActiveComposition)?
        .into_model()
        .map_err(|e| ApiError::Internal(format!("Stored composition is malformed: {}", e)))?;

    let template: Template = templates
        .find_by_id(request.template_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?
        .into();

    if !template.is_active {
        return Err(ApiError::NotFound("Template not found".to_string()));
    }

    let event_data = &composition.event_data;
    let family_name = if event_data.common.family_name.is_empty() {
        None
    } else {
        Some(event_data.common.family_name.clone())
    };

    let raw = serde_json::to_value(event_data)
        .map_err(|e| ApiError::Internal(format!("Failed to encode event data: {}", e)))?;
    let gallery = serde_json::to_value(&event_data.common.gallery_images)
        .map_err(|e| ApiError::Internal(format!("Failed to encode gallery: {}", e)))?;

    let new = NewInvitation {
        user_id: auth.user_id,
        event_type: event_data.event_type().as_str().to_string(),
        religious_type: event_data.religious_type.clone(),
        template_id: template.id,
        event_data: raw,
        family_name,
        main_image: event_data.common.main_image.clone(),
        gallery_images: gallery,
    };

    let invitation = invitations
        .publish(&new, generate_share_token)
        .await?
        .into_model()
        .map_err(|e| ApiError::Internal(format!("Stored invitation is malformed: {}", e)))?;

    let share_url = format!("/api/v1/i/{}", invitation.share_token);

    Ok((
        StatusCode::CREATED,
        Json(PublishResponse {
            invitation,
            share_url,
        }),
    ))
}

/// List the caller's invitations, newest first.
///
/// GET /api/v1/invitations
pub async fn list(
    State(state): State<AppState>,
    auth: UserAuth,
) -> Result<Json<InvitationListResponse>, ApiError> {
    let repo = InvitationRepository::new(state.pool.clone());

    let invitations = repo
        .list_by_user(auth.user_id)
        .await?
        .into_iter()
        .map(|entity| entity.into_model())
        .collect::<Result<Vec<Invitation>, _>>()
        .map_err(|e| ApiError::Internal(format!("Stored invitation is malformed: {}", e)))?;

    Ok(Json(InvitationListResponse { invitations }))
}

/// Fetch one of the caller's invitations with its guest replies.
///
/// Another user's invitation is indistinguishable from a missing one.
///
/// GET /api/v1/invitations/:id
pub async fn get(
    State(state): State<AppState>,
    auth: UserAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<InvitationDetailResponse>, ApiError> {
    let invitations = InvitationRepository::new(state.pool.clone());
    let templates = TemplateRepository::new(state.pool.clone());
    let rsvps_repo = RsvpRepository::new(state.pool.clone());

    let invitation = invitations
        .find_by_id_for_user(id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invitation not found".to_string()))?
        .into_model()
        .map_err(|e| ApiError::Internal(format!("Stored invitation is malformed: {}", e)))?;

    let template = templates
        .find_by_id(invitation.template_id)
        .await?
        .map(Template::from);

    let rsvps = rsvps_repo
        .list_by_invitation(invitation.id)
        .await?
        .into_iter()
        .map(Rsvp::try_from)
        .collect::<Result<Vec<Rsvp>, _>>()
        .map_err(|e| ApiError::Internal(format!("Stored RSVP is malformed: {}", e)))?;

    let rsvp_stats = RsvpStats::from_rsvps(&rsvps);

    Ok(Json(InvitationDetailResponse {
        invitation,
        template,
        rsvps,
        rsvp_stats,
    }))
}
