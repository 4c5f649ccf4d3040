/// Mints signed bearer tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: i64, username: &str) -> anyhow::Result<String>;
}
