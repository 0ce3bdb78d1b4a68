//! User repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, mobile, password_hash, is_verified, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, mobile, password_hash, is_verified, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Check whether an email or mobile number is already registered.
    pub async fn identity_exists(&self, email: &str, mobile: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("user_identity_exists");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) as count
            FROM users
            WHERE email = $1 OR mobile = $2
            "#,
        )
        .bind(email)
        .bind(mobile)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0 > 0)
    }

    /// Create a new unverified user account.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        mobile: &str,
        password_hash: &str,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, email, mobile, password_hash, is_verified)
            VALUES ($1, $2, $3, $4, false)
            RETURNING id, name, email, mobile, password_hash, is_verified, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(mobile)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Mark a user's account as verified.
    pub async fn mark_verified(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("mark_user_verified");
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_verified = true, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Note: UserRepository tests require database connection and are covered by integration tests
}
