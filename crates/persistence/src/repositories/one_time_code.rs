//! One-time code repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::OneTimeCodeEntity;
use crate::metrics::QueryTimer;

/// Repository for one-time verification codes.
#[derive(Clone)]
pub struct OneTimeCodeRepository {
    pool: PgPool,
}

impl OneTimeCodeRepository {
    /// Creates a new OneTimeCodeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issue a new code for an email address.
    pub async fn create(
        &self,
        email: &str,
        code: &str,
        purpose: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<OneTimeCodeEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_one_time_code");
        let result = sqlx::query_as::<_, OneTimeCodeEntity>(
            r#"
            INSERT INTO one_time_codes (email, code, purpose, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, code, purpose, is_used, expires_at, created_at
            "#,
        )
        .bind(email)
        .bind(code)
        .bind(purpose)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Atomically consume a matching, unused, unexpired code.
    ///
    /// The guarded UPDATE makes acceptance exactly-once: a replay of the
    /// same code finds `is_used = true` and affects no rows.
    pub async fn consume(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("consume_one_time_code");
        let result = sqlx::query(
            r#"
            UPDATE one_time_codes
            SET is_used = true
            WHERE email = $1 AND code = $2 AND is_used = false AND expires_at > $3
            "#,
        )
        .bind(email)
        .bind(code)
        .bind(now)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }

    /// Delete codes that expired before the cutoff. Returns rows removed.
    pub async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_expired_one_time_codes");
        let result = sqlx::query(
            r#"
            DELETE FROM one_time_codes
            WHERE expires_at < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: OneTimeCodeRepository tests require database connection and are covered by integration tests
}
