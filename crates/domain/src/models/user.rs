//! User account model and auth request payloads.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref MOBILE_REGEX: Regex = Regex::new(r"^[0-9]{10,15}$").unwrap();
}

/// A registered account. `password_hash` never leaves the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(regex(path = *MOBILE_REGEX, message = "Mobile must be 10-15 digits"))]
    pub mobile: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            mobile: "9876543210".into(),
            password: "correct horse battery".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn rejects_bad_email() {
        let mut req = register_request();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_short_mobile() {
        let mut req = register_request();
        req.mobile = "12345".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_numeric_mobile() {
        let mut req = register_request();
        req.mobile = "98765abc10".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_short_password() {
        let mut req = register_request();
        req.password = "short".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            mobile: "9876543210".into(),
            password_hash: "$argon2id$v=19$...".into(),
            is_verified: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }
}
