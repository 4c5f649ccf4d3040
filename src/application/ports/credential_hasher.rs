use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct HashError(pub String);

/// Salted one-way password hashing.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, HashError>;
    /// `Ok(false)` on mismatch; `Err` only when the stored hash cannot be
    /// processed at all.
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError>;
    /// Spends the same work as `verify` against a hash no password matches.
    /// Login calls it when the username does not exist.
    async fn verify_dummy(&self, password: &str);
}
