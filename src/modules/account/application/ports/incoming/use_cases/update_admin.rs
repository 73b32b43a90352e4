use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::{ActorRepositoryError, HashError};

#[derive(Debug, Clone)]
pub struct UpdateAdminInput {
    pub username: String,
    /// `None` or empty keeps the current password.
    pub password: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAdminError {
    #[error("Admin not found")]
    NotFound,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ActorRepositoryError> for UpdateAdminError {
    fn from(err: ActorRepositoryError) -> Self {
        match err {
            ActorRepositoryError::NotFound => UpdateAdminError::NotFound,
            ActorRepositoryError::UsernameAlreadyExists => UpdateAdminError::UsernameAlreadyExists,
            ActorRepositoryError::DatabaseError(msg) => UpdateAdminError::RepositoryError(msg),
        }
    }
}

impl From<HashError> for UpdateAdminError {
    fn from(err: HashError) -> Self {
        UpdateAdminError::HashingFailed(err.to_string())
    }
}

#[async_trait]
pub trait UpdateAdminUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, input: UpdateAdminInput) -> Result<Actor, UpdateAdminError>;
}
