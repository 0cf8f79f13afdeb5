// src/infrastructure/security/session.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::auth::SessionAuthenticator,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Looks a presented session id up in the sessions table. Rows are written
/// by the external identity service; expiry is honored at lookup time.
#[derive(Clone)]
pub struct PostgresSessionAuthenticator {
    pool: PgPool,
}

impl PostgresSessionAuthenticator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionRow {
    user_id: i64,
    username: String,
}

#[async_trait]
impl SessionAuthenticator for PostgresSessionAuthenticator {
    async fn authenticate(&self, session_id: &str) -> ApplicationResult<AuthenticatedUser> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT s.user_id, u.username \
             FROM sessions s JOIN users u ON u.id = s.user_id \
             WHERE s.id = $1 AND s.expires_at > now()",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        row.map(|row| AuthenticatedUser {
            id: row.user_id,
            username: row.username,
        })
        .ok_or_else(|| ApplicationError::unauthorized("unknown or expired session"))
    }
}
