// src/application/ports/auth.rs
use crate::application::dto::AuthenticatedUser;
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Verifies a presented session identifier against the session store.
/// Login and session minting live in the external identity service.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    async fn authenticate(&self, session_id: &str) -> ApplicationResult<AuthenticatedUser>;
}
