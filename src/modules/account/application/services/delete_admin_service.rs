use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::incoming::use_cases::{
    DeleteAdminError, DeleteAdminUseCase,
};
use crate::modules::account::application::ports::outgoing::ActorRepository;

pub struct DeleteAdminService<R>
where
    R: ActorRepository,
{
    repository: R,
}

impl<R> DeleteAdminService<R>
where
    R: ActorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAdminUseCase for DeleteAdminService<R>
where
    R: ActorRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Actor, DeleteAdminError> {
        self.repository
            .delete_actor(id)
            .await
            .map_err(DeleteAdminError::from)
    }
}
