use crate::application::error::ServiceError;
use crate::application::ports::credential_hasher::CredentialHasher;
use crate::application::ports::token_issuer::TokenIssuer;
use crate::application::ports::user_repository::UserRepository;

pub struct Login<'a, R, H, T>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub repo: &'a R,
    pub hasher: &'a H,
    pub tokens: &'a T,
}

#[derive(Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user_id: i64,
    pub username: String,
    pub token: String,
}

impl<'a, R, H, T> Login<'a, R, H, T>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    /// Unknown user and wrong password both yield `InvalidCredentials`.
    pub async fn execute(&self, req: &LoginRequest) -> Result<LoginOutcome, ServiceError> {
        let Some(row) = self
            .repo
            .find_by_username(&req.username)
            .await
            .map_err(ServiceError::DataStore)?
        else {
            // keep the miss as slow as a wrong password
            self.hasher.verify_dummy(&req.password).await;
            tracing::debug!(username = %req.username, "login_unknown_user");
            return Err(ServiceError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify(&req.password, &row.password_hash)
            .await
            .map_err(ServiceError::Hashing)?;
        if !matches {
            tracing::debug!(user_id = row.id, "login_password_mismatch");
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(row.id, &row.username)
            .map_err(ServiceError::TokenSigning)?;
        tracing::info!(user_id = row.id, "login_succeeded");
        Ok(LoginOutcome {
            user_id: row.id,
            username: row.username,
            token,
        })
    }
}
