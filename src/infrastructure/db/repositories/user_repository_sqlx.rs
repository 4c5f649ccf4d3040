use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::user_repository::{CreateUserError, UserRepository, UserRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserRow, CreateUserError> {
        let row = sqlx::query(
            r#"INSERT INTO app_users (username, password_hash) VALUES ($1, $2)
               RETURNING id, username, password_hash"#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                CreateUserError::UsernameTaken
            }
            other => CreateUserError::Store(other.into()),
        })?;
        to_user_row(&row).map_err(CreateUserError::Store)
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row =
            sqlx::query(r#"SELECT id, username, password_hash FROM app_users WHERE username = $1"#)
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        row.as_ref().map(to_user_row).transpose()
    }
}

fn to_user_row(r: &PgRow) -> anyhow::Result<UserRow> {
    Ok(UserRow {
        id: r.try_get("id")?,
        username: r.try_get("username")?,
        password_hash: r.try_get("password_hash")?,
    })
}
