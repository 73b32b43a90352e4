use async_trait::async_trait;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::{ActorRepositoryError, HashError};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Trusted administrative creation: flags are persisted exactly as given.
#[derive(Debug, Clone)]
pub struct CreateAdminInput {
    pub username: String,
    pub password: String,
    pub role_id: i32,
    pub is_verified: bool,
    pub is_active: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAdminError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ActorRepositoryError> for CreateAdminError {
    fn from(err: ActorRepositoryError) -> Self {
        match err {
            ActorRepositoryError::UsernameAlreadyExists => CreateAdminError::UsernameAlreadyExists,
            other => CreateAdminError::RepositoryError(other.to_string()),
        }
    }
}

impl From<HashError> for CreateAdminError {
    fn from(err: HashError) -> Self {
        CreateAdminError::HashingFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateAdminUseCase: Send + Sync {
    async fn execute(&self, input: CreateAdminInput) -> Result<Actor, CreateAdminError>;
}
