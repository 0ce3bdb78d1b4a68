//! Event type catalog repository.

use sqlx::PgPool;

use crate::entities::EventTypeEntity;
use crate::metrics::QueryTimer;

/// Repository for the event type catalog.
#[derive(Clone)]
pub struct EventTypeRepository {
    pool: PgPool,
}

impl EventTypeRepository {
    /// Creates a new EventTypeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active event types in display order.
    pub async fn list_active(&self) -> Result<Vec<EventTypeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_event_types");
        let result = sqlx::query_as::<_, EventTypeEntity>(
            r#"
            SELECT id, name, display_name, description, icon, color, is_active, sort_order, created_at
            FROM event_types
            WHERE is_active = true
            ORDER BY sort_order, id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
