use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{ApprovalStatus, RegisterApproval};
use crate::modules::account::application::ports::incoming::use_cases::{
    UpdateRegisterApprovalError, UpdateRegisterApprovalUseCase,
};
use crate::modules::account::application::ports::outgoing::{
    ApprovalDecision, RegisterApprovalRepository,
};

pub struct UpdateRegisterApprovalService<R>
where
    R: RegisterApprovalRepository,
{
    repository: R,
}

impl<R> UpdateRegisterApprovalService<R>
where
    R: RegisterApprovalRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateRegisterApprovalUseCase for UpdateRegisterApprovalService<R>
where
    R: RegisterApprovalRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        status: ApprovalStatus,
        reviewer_id: Uuid,
    ) -> Result<RegisterApproval, UpdateRegisterApprovalError> {
        let decision = ApprovalDecision {
            status,
            reviewer_id,
        };

        self.repository
            .resolve(id, decision)
            .await
            .map_err(UpdateRegisterApprovalError::from)
    }
}
