use async_trait::async_trait;

use crate::modules::account::application::domain::entities::{Actor, ActorListFilter};
use crate::modules::account::application::ports::outgoing::ActorQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAdminsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ActorQueryError> for GetAdminsError {
    fn from(err: ActorQueryError) -> Self {
        match err {
            ActorQueryError::DatabaseError(msg) => GetAdminsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetAdminsUseCase: Send + Sync {
    async fn execute(&self, filter: ActorListFilter) -> Result<Vec<Actor>, GetAdminsError>;
}
