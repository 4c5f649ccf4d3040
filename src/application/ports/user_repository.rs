use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

#[derive(thiserror::Error, Debug)]
pub enum CreateUserError {
    #[error("username already exists")]
    UsernameTaken,
    #[error("{0}")]
    Store(#[source] anyhow::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserRow, CreateUserError>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>>;
}
