use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{
    Actor, ActorChanges, NewActor, RegisterApproval,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActorRepositoryError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Actor not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Actor row plus the pending approval created in the same transaction.
#[derive(Debug, Clone)]
pub struct RegisteredActor {
    pub actor: Actor,
    pub approval: RegisterApproval,
}

#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn create_actor(&self, actor: NewActor) -> Result<Actor, ActorRepositoryError>;

    async fn update_actor(
        &self,
        id: Uuid,
        changes: ActorChanges,
    ) -> Result<Actor, ActorRepositoryError>;

    /// Returns the row as it was before deletion.
    async fn delete_actor(&self, id: Uuid) -> Result<Actor, ActorRepositoryError>;

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Actor, ActorRepositoryError>;

    /// Inserts the actor and a pending register approval atomically.
    async fn register_actor(&self, actor: NewActor)
        -> Result<RegisteredActor, ActorRepositoryError>;
}
