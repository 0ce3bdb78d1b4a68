//! Invitation repository for database operations.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::InvitationEntity;
use crate::metrics::QueryTimer;

const INVITATION_COLUMNS: &str = "id, user_id, event_type, religious_type, template_id, \
     event_data, family_name, main_image, gallery_images, share_token, view_count, is_active, \
     created_at";

/// Everything needed to publish a composition as an invitation.
#[derive(Debug, Clone)]
pub struct NewInvitation {
    pub user_id: Uuid,
    pub event_type: String,
    pub religious_type: String,
    pub template_id: i32,
    pub event_data: Value,
    pub family_name: Option<String>,
    pub main_image: Option<String>,
    pub gallery_images: Value,
}

/// Repository for published invitations.
#[derive(Clone)]
pub struct InvitationRepository {
    pool: PgPool,
}

impl InvitationRepository {
    /// Creates a new InvitationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a share token is already taken.
    pub async fn token_exists(&self, token: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("invitation_token_exists");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM invitations WHERE share_token = $1)
            "#,
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Generate a unique share token by retrying on collision.
    pub async fn generate_unique_token<F>(&self, generator: F) -> Result<String, sqlx::Error>
    where
        F: Fn() -> String,
    {
        let mut token = generator();
        let mut attempts = 0;

        while self.token_exists(&token).await? {
            token = generator();
            attempts += 1;
            if attempts > 100 {
                return Err(sqlx::Error::Protocol(
                    "Could not generate unique share token".to_string(),
                ));
            }
        }

        Ok(token)
    }

    /// Publish an invitation atomically.
    ///
    /// One transaction inserts the invitation, increments the template's
    /// usage counter and deletes the user's pending composition. A share
    /// token race (unique violation on insert) restarts the whole
    /// transaction with a fresh token, bounded.
    pub async fn publish<F>(
        &self,
        new: &NewInvitation,
        token_generator: F,
    ) -> Result<InvitationEntity, sqlx::Error>
    where
        F: Fn() -> String,
    {
        let timer = QueryTimer::new("publish_invitation");
        let mut attempts = 0;
        let result = loop {
            let token = self.generate_unique_token(&token_generator).await?;
            match self.publish_with_token(new, &token).await {
                Err(err) if is_unique_violation(&err) && attempts < 3 => {
                    attempts += 1;
                    continue;
                }
                other => break other,
            }
        };
        timer.record();
        result
    }

    async fn publish_with_token(
        &self,
        new: &NewInvitation,
        share_token: &str,
    ) -> Result<InvitationEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let entity = sqlx::query_as::<_, InvitationEntity>(&format!(
            r#"
            INSERT INTO invitations
                (user_id, event_type, religious_type, template_id, event_data,
                 family_name, main_image, gallery_images, share_token)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {INVITATION_COLUMNS}
            "#
        ))
        .bind(new.user_id)
        .bind(&new.event_type)
        .bind(&new.religious_type)
        .bind(new.template_id)
        .bind(&new.event_data)
        .bind(&new.family_name)
        .bind(&new.main_image)
        .bind(&new.gallery_images)
        .bind(share_token)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE templates
            SET usage_count = usage_count + 1
            WHERE id = $1
            "#,
        )
        .bind(new.template_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM compositions
            WHERE user_id = $1
            "#,
        )
        .bind(new.user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(entity)
    }

    /// Find an active invitation by its share token.
    pub async fn find_active_by_token(
        &self,
        share_token: &str,
    ) -> Result<Option<InvitationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_invitation_by_token");
        let result = sqlx::query_as::<_, InvitationEntity>(&format!(
            r#"
            SELECT {INVITATION_COLUMNS}
            FROM invitations
            WHERE share_token = $1 AND is_active = true
            "#
        ))
        .bind(share_token)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an invitation by ID, scoped to its owner.
    pub async fn find_by_id_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<InvitationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_invitation_by_id_for_user");
        let result = sqlx::query_as::<_, InvitationEntity>(&format!(
            r#"
            SELECT {INVITATION_COLUMNS}
            FROM invitations
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a user's invitations, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<InvitationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_invitations_by_user");
        let result = sqlx::query_as::<_, InvitationEntity>(&format!(
            r#"
            SELECT {INVITATION_COLUMNS}
            FROM invitations
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Bump the public view counter.
    pub async fn increment_view_count(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("increment_invitation_view_count");
        sqlx::query(
            r#"
            UPDATE invitations
            SET view_count = view_count + 1
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}

#[cfg(test)]
mod tests {
    // Note: InvitationRepository tests require database connection and are covered by integration tests
}
