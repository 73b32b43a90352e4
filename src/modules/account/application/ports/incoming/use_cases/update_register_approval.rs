use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{ApprovalStatus, RegisterApproval};
use crate::modules::account::application::ports::outgoing::RegisterApprovalRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRegisterApprovalError {
    #[error("Register approval not found")]
    NotFound,

    #[error("Registered actor not found")]
    ActorNotFound,

    #[error("Register approval already resolved as {0}")]
    AlreadyResolved(ApprovalStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RegisterApprovalRepositoryError> for UpdateRegisterApprovalError {
    fn from(err: RegisterApprovalRepositoryError) -> Self {
        match err {
            RegisterApprovalRepositoryError::NotFound => UpdateRegisterApprovalError::NotFound,
            RegisterApprovalRepositoryError::ActorNotFound => {
                UpdateRegisterApprovalError::ActorNotFound
            }
            RegisterApprovalRepositoryError::AlreadyResolved(status) => {
                UpdateRegisterApprovalError::AlreadyResolved(status)
            }
            RegisterApprovalRepositoryError::DatabaseError(msg) => {
                UpdateRegisterApprovalError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateRegisterApprovalUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        status: ApprovalStatus,
        reviewer_id: Uuid,
    ) -> Result<RegisterApproval, UpdateRegisterApprovalError>;
}
