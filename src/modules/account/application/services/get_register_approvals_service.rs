use async_trait::async_trait;

use crate::modules::account::application::domain::entities::RegisterApproval;
use crate::modules::account::application::ports::incoming::use_cases::{
    GetRegisterApprovalsError, GetRegisterApprovalsUseCase,
};
use crate::modules::account::application::ports::outgoing::RegisterApprovalQuery;

pub struct GetRegisterApprovalsService<Q>
where
    Q: RegisterApprovalQuery,
{
    query: Q,
}

impl<Q> GetRegisterApprovalsService<Q>
where
    Q: RegisterApprovalQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRegisterApprovalsUseCase for GetRegisterApprovalsService<Q>
where
    Q: RegisterApprovalQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<RegisterApproval>, GetRegisterApprovalsError> {
        self.query
            .list_all()
            .await
            .map_err(GetRegisterApprovalsError::from)
    }
}
