use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::account::application::domain::entities::{Actor, NewActor};
use crate::modules::account::application::ports::incoming::use_cases::{
    CreateAdminError, CreateAdminInput, CreateAdminUseCase,
};
use crate::modules::account::application::ports::outgoing::{ActorRepository, PasswordHasher};

pub struct CreateAdminService<R>
where
    R: ActorRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> CreateAdminService<R>
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
impl<R> CreateAdminUseCase for CreateAdminService<R>
where
    R: ActorRepository + Send + Sync,
{
    async fn execute(&self, input: CreateAdminInput) -> Result<Actor, CreateAdminError> {
        let credential = self.password_hasher.hash_password(&input.password).await?;

        let new_actor = NewActor {
            username: input.username,
            credential,
            role_id: input.role_id,
            is_verified: input.is_verified,
            is_active: input.is_active,
        };

        self.repository
            .create_actor(new_actor)
            .await
            .map_err(CreateAdminError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fake_hasher::{FailingPasswordHasher, FakePasswordHasher};
    use crate::tests::support::in_memory_store::InMemoryAccountStore;

    fn input(username: &str) -> CreateAdminInput {
        CreateAdminInput {
            username: username.to_string(),
            password: "s3cret".to_string(),
            role_id: 1,
            is_verified: true,
            is_active: false,
        }
    }

    #[tokio::test]
    async fn stores_hashed_password_and_given_flags() {
        let store = InMemoryAccountStore::new();
        let service = CreateAdminService::new(store.clone(), Arc::new(FakePasswordHasher));

        let actor = service.execute(input("root")).await.unwrap();

        assert_eq!(actor.username, "root");
        assert_eq!(actor.role_id, 1);
        assert!(actor.is_verified);
        assert!(!actor.is_active);
        assert_ne!(actor.password_hash, "s3cret");
        assert_eq!(actor.credential(), FakePasswordHasher::credential_for("s3cret"));
        assert_eq!(store.actors().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = InMemoryAccountStore::new();
        let service = CreateAdminService::new(store.clone(), Arc::new(FakePasswordHasher));
        service.execute(input("root")).await.unwrap();

        let result = service.execute(input("root")).await;

        assert!(matches!(result, Err(CreateAdminError::UsernameAlreadyExists)));
        assert_eq!(store.actors().len(), 1);
    }

    #[tokio::test]
    async fn hashing_failure_writes_nothing() {
        let store = InMemoryAccountStore::new();
        let service = CreateAdminService::new(store.clone(), Arc::new(FailingPasswordHasher));

        let result = service.execute(input("root")).await;

        assert!(matches!(result, Err(CreateAdminError::HashingFailed(_))));
        assert!(store.actors().is_empty());
    }
}
