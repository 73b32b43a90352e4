use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{Actor, ActorListFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActorQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ActorQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Actor>, ActorQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Actor>, ActorQueryError>;

    /// Ordered by creation time, windowed by `filter.window()`.
    async fn list(&self, filter: ActorListFilter) -> Result<Vec<Actor>, ActorQueryError>;
}
