//! Template catalog repository.

use sqlx::PgPool;

use crate::entities::TemplateEntity;
use crate::metrics::QueryTimer;

const TEMPLATE_COLUMNS: &str = "id, name, description, event_type, religious_type, style, \
     color_scheme, font_family, emoji_theme, preview_image, is_active, usage_count, created_at";

/// Repository for the template catalog.
#[derive(Clone)]
pub struct TemplateRepository {
    pool: PgPool,
}

impl TemplateRepository {
    /// Creates a new TemplateRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a template by ID, active or not.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TemplateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_template_by_id");
        let result = sqlx::query_as::<_, TemplateEntity>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List active templates for an event type and exact religious variant.
    pub async fn list_active(
        &self,
        event_type: &str,
        religious_type: &str,
    ) -> Result<Vec<TemplateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_templates");
        let result = sqlx::query_as::<_, TemplateEntity>(&format!(
            r#"
            SELECT {TEMPLATE_COLUMNS}
            FROM templates
            WHERE is_active = true AND event_type = $1 AND religious_type = $2
            ORDER BY id
            "#
        ))
        .bind(event_type)
        .bind(religious_type)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
