use crate::application::ports::credential_hasher::HashError;

/// Failure of a single request. Nothing is retried; the presentation layer
/// turns each kind into one HTTP response.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    DataStore(#[source] anyhow::Error),
    #[error("{0}")]
    UserInsert(#[source] anyhow::Error),
    #[error("username already exists")]
    UsernameTaken,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    Hashing(#[source] HashError),
    #[error("{0}")]
    TokenSigning(#[source] anyhow::Error),
}
