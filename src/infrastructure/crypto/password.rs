use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use password_hash::rand_core::OsRng;

use crate::application::ports::credential_hasher::{CredentialHasher, HashError};

/// Argon2id with a configurable work factor. Hashing runs on the blocking
/// pool since each call burns `iterations` passes over `memory_kib` of memory.
#[derive(Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
    // same cost as real hashes, for unknown-user logins
    dummy_hash: String,
}

impl Argon2CredentialHasher {
    pub fn new(memory_kib: u32, iterations: u32) -> anyhow::Result<Self> {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .map_err(|e| anyhow::anyhow!("invalid argon2 parameters: {e}"))?;
        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
            .hash_password(b"no-account-has-this-password", &salt)
            .map_err(|e| anyhow::anyhow!("argon2 self-test failed: {e}"))?
            .to_string();
        Ok(Self { params, dummy_hash })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> Result<String, HashError> {
        let argon2 = self.argon2();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| HashError(e.to_string()))
        })
        .await
        .map_err(|e| HashError(format!("hashing task failed: {e}")))?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError> {
        let argon2 = self.argon2();
        let password = password.to_owned();
        let stored = password_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            // cost parameters come from the stored PHC string, not from self
            let parsed = PasswordHash::new(&stored).map_err(|e| HashError(e.to_string()))?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(HashError(e.to_string())),
            }
        })
        .await
        .map_err(|e| HashError(format!("verification task failed: {e}")))?
    }

    async fn verify_dummy(&self, password: &str) {
        if let Err(e) = self.verify(password, &self.dummy_hash).await {
            tracing::warn!(error = %e, "dummy_verify_failed");
        }
    }
}
