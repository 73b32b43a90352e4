use async_trait::async_trait;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::{
    ActorQueryError, ActorRepositoryError, HashError,
};

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ActorRepositoryError> for RegisterError {
    fn from(err: ActorRepositoryError) -> Self {
        match err {
            ActorRepositoryError::UsernameAlreadyExists => RegisterError::UsernameAlreadyExists,
            other => RegisterError::RepositoryError(other.to_string()),
        }
    }
}

impl From<ActorQueryError> for RegisterError {
    fn from(err: ActorQueryError) -> Self {
        RegisterError::RepositoryError(err.to_string())
    }
}

impl From<HashError> for RegisterError {
    fn from(err: HashError) -> Self {
        RegisterError::HashingFailed(err.to_string())
    }
}

#[async_trait]
pub trait RegisterAdminUseCase: Send + Sync {
    async fn execute(&self, input: RegisterInput) -> Result<Actor, RegisterError>;
}
