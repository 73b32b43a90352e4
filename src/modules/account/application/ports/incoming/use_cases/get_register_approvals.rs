use async_trait::async_trait;

use crate::modules::account::application::domain::entities::RegisterApproval;
use crate::modules::account::application::ports::outgoing::RegisterApprovalQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRegisterApprovalsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<RegisterApprovalQueryError> for GetRegisterApprovalsError {
    fn from(err: RegisterApprovalQueryError) -> Self {
        match err {
            RegisterApprovalQueryError::DatabaseError(msg) => {
                GetRegisterApprovalsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetRegisterApprovalsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<RegisterApproval>, GetRegisterApprovalsError>;
}
