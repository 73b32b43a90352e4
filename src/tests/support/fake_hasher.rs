use async_trait::async_trait;

use crate::account::application::domain::entities::Credential;
use crate::account::application::ports::outgoing::{HashError, PasswordHasher};

/// Deterministic, non-cryptographic hasher for service tests.
#[derive(Debug, Clone, Default)]
pub struct FakePasswordHasher;

impl FakePasswordHasher {
    pub fn credential_for(password: &str) -> Credential {
        Credential {
            hash: format!("fake${password}"),
            salt: "fixed-salt".to_string(),
        }
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<Credential, HashError> {
        Ok(Self::credential_for(password))
    }

    async fn verify_password(
        &self,
        password: &str,
        credential: &Credential,
    ) -> Result<bool, HashError> {
        Ok(*credential == Self::credential_for(password))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash_password(&self, _password: &str) -> Result<Credential, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(
        &self,
        _password: &str,
        _credential: &Credential,
    ) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}
