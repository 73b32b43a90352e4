use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{ApprovalStatus, RegisterApproval};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalDecision {
    pub status: ApprovalStatus,
    pub reviewer_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterApprovalRepositoryError {
    #[error("Register approval not found")]
    NotFound,

    #[error("Registered actor not found")]
    ActorNotFound,

    #[error("Register approval already resolved as {0}")]
    AlreadyResolved(ApprovalStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegisterApprovalRepository: Send + Sync {
    /// Writes the decision and cascades it onto the registered actor in one
    /// transaction. Nothing is written when any step fails.
    async fn resolve(
        &self,
        id: Uuid,
        decision: ApprovalDecision,
    ) -> Result<RegisterApproval, RegisterApprovalRepositoryError>;
}
