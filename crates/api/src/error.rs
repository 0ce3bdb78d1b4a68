use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Invalid or expired verification code")]
    InvalidOrExpiredCode,

    #[error("No active composition")]
    NoActiveComposition,

    #[error("Invalid RSVP response: {0}")]
    InvalidResponse(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store write failure: {0}")]
    StoreWriteFailure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::DuplicateIdentity(msg) => {
                (StatusCode::CONFLICT, "duplicate_identity", msg.clone())
            }
            ApiError::InvalidCredential => (
                StatusCode::UNAUTHORIZED,
                "invalid_credential",
                "Invalid email or password".into(),
            ),
            ApiError::InvalidOrExpiredCode => (
                StatusCode::BAD_REQUEST,
                "invalid_or_expired_code",
                "Verification code is invalid or has expired".into(),
            ),
            ApiError::NoActiveComposition => (
                StatusCode::CONFLICT,
                "no_active_composition",
                "No composed invitation is waiting to be published".into(),
            ),
            ApiError::InvalidResponse(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_response", msg.clone())
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::StoreWriteFailure(msg) => {
                tracing::error!("Store write failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store_write_failure",
                    "Could not persist the change".into(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => ApiError::Conflict("Resource already exists".into()),
                        "23503" => ApiError::NotFound("Referenced resource not found".into()),
                        _ => ApiError::StoreWriteFailure(format!("Database error: {}", db_err)),
                    }
                } else {
                    ApiError::StoreWriteFailure(format!("Database error: {}", db_err))
                }
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
            })
            .collect();

        let message = if messages.len() == 1 {
            messages[0].clone()
        } else {
            format!("{} validation errors", messages.len())
        };

        ApiError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_duplicate_identity_is_conflict() {
        let error = ApiError::DuplicateIdentity("Email already registered".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_credential_is_unauthorized() {
        let response = ApiError::InvalidCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_or_expired_code_is_bad_request() {
        let response = ApiError::InvalidOrExpiredCode.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_active_composition_is_conflict() {
        let response = ApiError::NoActiveComposition.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_response_is_bad_request() {
        let error = ApiError::InvalidResponse("must be yes, no or maybe".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found() {
        let error = ApiError::NotFound("resource not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_write_failure_is_internal() {
        let error = ApiError::StoreWriteFailure("constraint".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Resource not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ApiError::InvalidCredential),
            "Invalid credentials"
        );
        assert_eq!(
            format!("{}", ApiError::NoActiveComposition),
            "No active composition"
        );
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
    }
}
