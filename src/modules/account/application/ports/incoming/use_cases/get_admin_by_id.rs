use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::ActorQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAdminByIdError {
    #[error("Admin not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ActorQueryError> for GetAdminByIdError {
    fn from(err: ActorQueryError) -> Self {
        match err {
            ActorQueryError::DatabaseError(msg) => GetAdminByIdError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetAdminByIdUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Actor, GetAdminByIdError>;
}
