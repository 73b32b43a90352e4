use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::ActorRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAdminError {
    #[error("Admin not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ActorRepositoryError> for DeleteAdminError {
    fn from(err: ActorRepositoryError) -> Self {
        match err {
            ActorRepositoryError::NotFound => DeleteAdminError::NotFound,
            other => DeleteAdminError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteAdminUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Actor, DeleteAdminError>;
}
