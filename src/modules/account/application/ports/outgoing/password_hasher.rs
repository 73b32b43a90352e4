use async_trait::async_trait;

use crate::modules::account::application::domain::entities::Credential;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    async fn hash_password(&self, password: &str) -> Result<Credential, HashError>;

    /// `Ok(false)` on mismatch, `Err` only when the stored credential is unusable.
    async fn verify_password(
        &self,
        password: &str,
        credential: &Credential,
    ) -> Result<bool, HashError>;
}
