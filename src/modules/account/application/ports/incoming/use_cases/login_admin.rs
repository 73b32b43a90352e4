use async_trait::async_trait;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::outgoing::ActorQueryError;

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately the same error.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ActorQueryError> for LoginError {
    fn from(err: ActorQueryError) -> Self {
        match err {
            ActorQueryError::DatabaseError(msg) => LoginError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<Actor, LoginError>;
}
