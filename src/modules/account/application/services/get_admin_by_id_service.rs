use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::incoming::use_cases::{
    GetAdminByIdError, GetAdminByIdUseCase,
};
use crate::modules::account::application::ports::outgoing::ActorQuery;

pub struct GetAdminByIdService<Q>
where
    Q: ActorQuery,
{
    query: Q,
}

impl<Q> GetAdminByIdService<Q>
where
    Q: ActorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAdminByIdUseCase for GetAdminByIdService<Q>
where
    Q: ActorQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Actor, GetAdminByIdError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or(GetAdminByIdError::NotFound)
    }
}
