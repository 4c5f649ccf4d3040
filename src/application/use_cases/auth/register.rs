use crate::application::error::ServiceError;
use crate::application::ports::credential_hasher::CredentialHasher;
use crate::application::ports::user_repository::{CreateUserError, UserRepository, UserRow};

pub struct Register<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub repo: &'a R,
    pub hasher: &'a H,
}

#[derive(Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R, H> Register<'a, R, H>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    /// No existence pre-check: the store's unique constraint decides.
    pub async fn execute(&self, req: &RegisterRequest) -> Result<UserRow, ServiceError> {
        let hash = self
            .hasher
            .hash(&req.password)
            .await
            .map_err(ServiceError::Hashing)?;
        let user = self
            .repo
            .create_user(&req.username, &hash)
            .await
            .map_err(|err| match err {
                CreateUserError::UsernameTaken => ServiceError::UsernameTaken,
                CreateUserError::Store(e) => ServiceError::UserInsert(e),
            })?;
        tracing::info!(user_id = user.id, username = %user.username, "user_registered");
        Ok(user)
    }
}
