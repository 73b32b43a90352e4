use async_trait::async_trait;

use crate::modules::account::application::domain::entities::{Actor, ActorListFilter};
use crate::modules::account::application::ports::incoming::use_cases::{
    GetAdminsError, GetAdminsUseCase,
};
use crate::modules::account::application::ports::outgoing::ActorQuery;

pub struct GetAdminsService<Q>
where
    Q: ActorQuery,
{
    query: Q,
}

impl<Q> GetAdminsService<Q>
where
    Q: ActorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAdminsUseCase for GetAdminsService<Q>
where
    Q: ActorQuery + Send + Sync,
{
    async fn execute(&self, filter: ActorListFilter) -> Result<Vec<Actor>, GetAdminsError> {
        self.query.list(filter).await.map_err(GetAdminsError::from)
    }
}
