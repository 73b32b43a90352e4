use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{Actor, ActorChanges};
use crate::modules::account::application::ports::incoming::use_cases::{
    UpdateAdminError, UpdateAdminInput, UpdateAdminUseCase,
};
use crate::modules::account::application::ports::outgoing::{ActorRepository, PasswordHasher};

pub struct UpdateAdminService<R>
where
    R: ActorRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> UpdateAdminService<R>
where
    R: ActorRepository,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> UpdateAdminUseCase for UpdateAdminService<R>
where
    R: ActorRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, input: UpdateAdminInput) -> Result<Actor, UpdateAdminError> {
        let credential = match input.password.as_deref() {
            Some(password) if !password.is_empty() => {
                Some(self.password_hasher.hash_password(password).await?)
            }
            _ => None,
        };

        let changes = ActorChanges {
            username: input.username,
            credential,
            is_verified: input.is_verified,
            is_active: input.is_active,
        };

        self.repository
            .update_actor(id, changes)
            .await
            .map_err(UpdateAdminError::from)
    }
}
