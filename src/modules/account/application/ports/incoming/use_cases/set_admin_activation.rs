use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::ActorRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetAdminActivationError {
    #[error("Admin not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ActorRepositoryError> for SetAdminActivationError {
    fn from(err: ActorRepositoryError) -> Self {
        match err {
            ActorRepositoryError::NotFound => SetAdminActivationError::NotFound,
            other => SetAdminActivationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait SetAdminActivationUseCase: Send + Sync {
    async fn activate(&self, id: Uuid) -> Result<Actor, SetAdminActivationError>;
    async fn deactivate(&self, id: Uuid) -> Result<Actor, SetAdminActivationError>;
}
