//! One-time verification code entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the one_time_codes table.
#[derive(Debug, Clone, FromRow)]
pub struct OneTimeCodeEntity {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub purpose: String,
    pub is_used: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OneTimeCodeEntity {
    /// Whether the code can still be accepted at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn code_entity(is_used: bool, expires_in: Duration) -> OneTimeCodeEntity {
        OneTimeCodeEntity {
            id: Uuid::new_v4(),
            email: "user@example.com".into(),
            code: "123456".into(),
            purpose: "verification".into(),
            is_used,
            expires_at: Utc::now() + expires_in,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn fresh_code_is_valid() {
        assert!(code_entity(false, Duration::minutes(10)).is_valid_at(Utc::now()));
    }

    #[test]
    fn used_or_expired_codes_are_invalid() {
        assert!(!code_entity(true, Duration::minutes(10)).is_valid_at(Utc::now()));
        assert!(!code_entity(false, Duration::minutes(-1)).is_valid_at(Utc::now()));
    }
}
