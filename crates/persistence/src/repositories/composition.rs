//! Pending composition repository.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CompositionEntity;
use crate::metrics::QueryTimer;

/// Repository for pending (unpublished) compositions.
#[derive(Clone)]
pub struct CompositionRepository {
    pool: PgPool,
}

impl CompositionRepository {
    /// Creates a new CompositionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store the user's pending composition, replacing any previous one.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        event_data: &Value,
    ) -> Result<CompositionEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_composition");
        let result = sqlx::query_as::<_, CompositionEntity>(
            r#"
            INSERT INTO compositions (user_id, event_data)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET event_data = EXCLUDED.event_data, created_at = NOW()
            RETURNING user_id, event_data, created_at
            "#,
        )
        .bind(user_id)
        .bind(event_data)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fetch the user's pending composition, if any.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CompositionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_composition_by_user");
        let result = sqlx::query_as::<_, CompositionEntity>(
            r#"
            SELECT user_id, event_data, created_at
            FROM compositions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
