use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::incoming::use_cases::{
    SetAdminActivationError, SetAdminActivationUseCase,
};
use crate::modules::account::application::ports::outgoing::ActorRepository;

pub struct SetAdminActivationService<R>
where
    R: ActorRepository,
{
    repository: R,
}

impl<R> SetAdminActivationService<R>
where
    R: ActorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetAdminActivationUseCase for SetAdminActivationService<R>
where
    R: ActorRepository + Send + Sync,
{
    async fn activate(&self, id: Uuid) -> Result<Actor, SetAdminActivationError> {
        self.repository
            .set_active(id, true)
            .await
            .map_err(SetAdminActivationError::from)
    }

    async fn deactivate(&self, id: Uuid) -> Result<Actor, SetAdminActivationError> {
        self.repository
            .set_active(id, false)
            .await
            .map_err(SetAdminActivationError::from)
    }
}
