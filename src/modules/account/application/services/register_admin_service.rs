use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::account::application::domain::entities::{Actor, NewActor};
use crate::modules::account::application::ports::incoming::use_cases::{
    RegisterAdminUseCase, RegisterError, RegisterInput,
};
use crate::modules::account::application::ports::outgoing::{
    ActorQuery, ActorRepository, PasswordHasher,
};

pub struct RegisterAdminService<Q, R>
where
    Q: ActorQuery,
    R: ActorRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterAdminService<Q, R>
where
    Q: ActorQuery,
    R: ActorRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterAdminUseCase for RegisterAdminService<Q, R>
where
    Q: ActorQuery + Send + Sync,
    R: ActorRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterInput) -> Result<Actor, RegisterError> {
        // Fast path only; the unique index catches concurrent registrations.
        if self.query.find_by_username(&input.username).await?.is_some() {
            return Err(RegisterError::UsernameAlreadyExists);
        }

        let credential = self.password_hasher.hash_password(&input.password).await?;

        let registered = self
            .repository
            .register_actor(NewActor::self_registered(input.username, credential))
            .await?;

        Ok(registered.actor)
    }
}
