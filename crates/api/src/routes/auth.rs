//! Authentication routes: registration, login, code verification, refresh.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use validator::Validate;

use domain::models::{LoginRequest, RefreshRequest, RegisterRequest, User, VerifyCodeRequest};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::auth::{AuthError, AuthService, LoginOutcome, TokenPair};

/// User information in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub is_verified: bool,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            mobile: user.mobile,
            is_verified: user.is_verified,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Token information in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<TokenPair> for TokensResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: pair.expires_in,
        }
    }
}

/// Response body for registration and unverified logins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPendingResponse {
    pub message: String,
    pub email: String,
    pub requires_verification: bool,
}

/// Response body once an account holds a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub tokens: TokensResponse,
}

/// Response body for either login outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Session(SessionResponse),
    VerificationPending(VerificationPendingResponse),
}

fn map_auth_error(err: AuthError) -> ApiError {
    match err {
        AuthError::IdentityExists => {
            ApiError::DuplicateIdentity("Email or mobile already registered".to_string())
        }
        AuthError::InvalidCredentials => ApiError::InvalidCredential,
        AuthError::InvalidCode => ApiError::InvalidOrExpiredCode,
        AuthError::UserNotFound => ApiError::InvalidOrExpiredCode,
        AuthError::InvalidRefreshToken => {
            ApiError::Unauthorized("Invalid refresh token".to_string())
        }
        AuthError::DatabaseError(db_err) => ApiError::from(db_err),
        AuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
        AuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
        AuthError::Internal(msg) => ApiError::Internal(msg),
    }
}

fn auth_service(state: &AppState) -> Result<AuthService, ApiError> {
    AuthService::new(state.pool.clone(), &state.config.jwt, state.notifier.clone())
        .map_err(|e| ApiError::Internal(format!("Failed to initialize auth service: {}", e)))
}

/// Register a new account. The account stays unverified until the emailed
/// code is presented.
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<VerificationPendingResponse>), ApiError> {
    request.validate()?;

    let service = auth_service(&state)?;

    let user = service
        .register(
            &request.name,
            &request.email,
            &request.mobile,
            &request.password,
        )
        .await
        .map_err(map_auth_error)?;

    let response = VerificationPendingResponse {
        message: "Registered. Check your email for the verification code.".to_string(),
        email: user.email,
        requires_verification: true,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Log in with email and password.
///
/// Wrong email and wrong password are indistinguishable to the caller. A
/// correct login against an unverified account re-issues a code instead of
/// tokens.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let service = auth_service(&state)?;

    let outcome = service
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    let response = match outcome {
        LoginOutcome::Authenticated { user, tokens } => LoginResponse::Session(SessionResponse {
            user: user.into(),
            tokens: tokens.into(),
        }),
        LoginOutcome::VerificationRequired { email } => {
            LoginResponse::VerificationPending(VerificationPendingResponse {
                message: "Account not verified. A new code has been sent.".to_string(),
                email,
                requires_verification: true,
            })
        }
    };

    Ok(Json(response))
}

/// Verify an account with a one-time code and start a session.
///
/// POST /api/v1/auth/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyCodeRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    request.validate()?;

    let service = auth_service(&state)?;

    let (user, tokens) = service
        .verify(&request.email, &request.code)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse {
        user: user.into(),
        tokens: tokens.into(),
    }))
}

/// Exchange a refresh token for a new token pair.
///
/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<TokensResponse>, ApiError> {
    request.validate()?;

    let service = auth_service(&state)?;

    let tokens = service
        .refresh(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(tokens.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn user_response_hides_nothing_it_should_show() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            mobile: "9876543210".into(),
            password_hash: "$argon2id$...".into(),
            is_verified: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let response = UserResponse::from(user.clone());
        assert_eq!(response.email, user.email);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("isVerified"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn login_response_shapes_differ() {
        let pending = LoginResponse::VerificationPending(VerificationPendingResponse {
            message: "Account not verified. A new code has been sent.".into(),
            email: "asha@example.com".into(),
            requires_verification: true,
        });
        let json = serde_json::to_string(&pending).unwrap();
        assert!(json.contains("requiresVerification"));
        assert!(!json.contains("accessToken"));
    }

    #[test]
    fn auth_errors_map_to_api_errors() {
        assert!(matches!(
            map_auth_error(AuthError::IdentityExists),
            ApiError::DuplicateIdentity(_)
        ));
        assert!(matches!(
            map_auth_error(AuthError::InvalidCredentials),
            ApiError::InvalidCredential
        ));
        assert!(matches!(
            map_auth_error(AuthError::InvalidCode),
            ApiError::InvalidOrExpiredCode
        ));
    }
}
