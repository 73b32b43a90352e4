use async_trait::async_trait;

use crate::modules::account::application::domain::entities::RegisterApproval;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterApprovalQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegisterApprovalQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<RegisterApproval>, RegisterApprovalQueryError>;
}
