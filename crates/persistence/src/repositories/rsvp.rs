//! RSVP repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::RsvpEntity;
use crate::metrics::QueryTimer;

/// A guest reply ready to be stored.
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub invitation_id: Uuid,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub response: String,
    pub guest_count: i32,
    pub message: Option<String>,
}

/// Repository for guest RSVPs.
#[derive(Clone)]
pub struct RsvpRepository {
    pool: PgPool,
}

impl RsvpRepository {
    /// Creates a new RsvpRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a guest reply.
    pub async fn create(&self, new: &NewRsvp) -> Result<RsvpEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_rsvp");
        let result = sqlx::query_as::<_, RsvpEntity>(
            r#"
            INSERT INTO rsvps
                (invitation_id, guest_name, guest_email, guest_phone, response, guest_count, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, invitation_id, guest_name, guest_email, guest_phone, response,
                      guest_count, message, responded_at
            "#,
        )
        .bind(new.invitation_id)
        .bind(&new.guest_name)
        .bind(&new.guest_email)
        .bind(&new.guest_phone)
        .bind(&new.response)
        .bind(new.guest_count)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List replies for an invitation, newest first.
    pub async fn list_by_invitation(
        &self,
        invitation_id: Uuid,
    ) -> Result<Vec<RsvpEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_rsvps_by_invitation");
        let result = sqlx::query_as::<_, RsvpEntity>(
            r#"
            SELECT id, invitation_id, guest_name, guest_email, guest_phone, response,
                   guest_count, message, responded_at
            FROM rsvps
            WHERE invitation_id = $1
            ORDER BY responded_at DESC
            "#,
        )
        .bind(invitation_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: RsvpRepository tests require database connection and are covered by integration tests
}
