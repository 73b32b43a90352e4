use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginInput,
};
use crate::modules::account::application::ports::outgoing::{ActorQuery, PasswordHasher};

pub struct LoginAdminService<Q>
where
    Q: ActorQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q> LoginAdminService<Q>
where
    Q: ActorQuery,
{
    pub fn new(query: Q, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q> LoginAdminUseCase for LoginAdminService<Q>
where
    Q: ActorQuery + Send + Sync,
{
    async fn execute(&self, input: LoginInput) -> Result<Actor, LoginError> {
        let Some(actor) = self.query.find_by_username(&input.username).await? else {
            // Burn one hash so unknown usernames cost the same as wrong passwords.
            let _ = self.password_hasher.hash_password(&input.password).await;
            return Err(LoginError::InvalidCredentials);
        };

        let verified = self
            .password_hasher
            .verify_password(&input.password, &actor.credential())
            .await
            .map_err(|e| {
                tracing::warn!(actor_id = %actor.id, error = %e, "Stored credential is unusable");
                LoginError::InvalidCredentials
            })?;

        if !verified {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(actor)
    }
}
