#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use stockroom::application::dto::stock::CategoryTotalDto;
use stockroom::application::ports::stock_repository::StockRepository;
use stockroom::application::ports::user_repository::{CreateUserError, UserRepository, UserRow};
use stockroom::bootstrap::app_context::{AppContext, AppServices};
use stockroom::bootstrap::config::Config;
use stockroom::infrastructure::crypto::jwt::JwtTokenIssuer;
use stockroom::infrastructure::crypto::password::Argon2CredentialHasher;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct StockRow {
    pub id: i64,
    pub item_type: &'static str,
    pub quantity: i64,
}

#[derive(Default)]
pub struct MemoryStock {
    pub items: Vec<StockRow>,
    pub requests: i64,
    pub out_of_stock: i64,
    pub returned_working: Vec<bool>,
}

impl MemoryStock {
    fn grouped(&self) -> Vec<CategoryTotalDto> {
        let mut sums: BTreeMap<&str, i64> = BTreeMap::new();
        for item in &self.items {
            *sums.entry(item.item_type).or_default() += item.quantity;
        }
        sums.into_iter()
            .map(|(item_type, total_quantity)| CategoryTotalDto {
                item_type: item_type.to_string(),
                total_quantity,
            })
            .collect()
    }
}

#[async_trait]
impl StockRepository for MemoryStock {
    async fn category_totals(&self) -> anyhow::Result<Vec<CategoryTotalDto>> {
        Ok(self.grouped())
    }

    async fn category_totals_below(
        &self,
        threshold: i64,
    ) -> anyhow::Result<Vec<CategoryTotalDto>> {
        Ok(self
            .grouped()
            .into_iter()
            .filter(|c| c.total_quantity < threshold)
            .collect())
    }

    async fn total_quantity(&self) -> anyhow::Result<Option<i64>> {
        if self.items.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.items.iter().map(|i| i.quantity).sum()))
    }

    async fn count_requests(&self) -> anyhow::Result<i64> {
        Ok(self.requests)
    }

    async fn count_out_of_stock(&self) -> anyhow::Result<i64> {
        Ok(self.out_of_stock)
    }

    async fn count_repaired(&self) -> anyhow::Result<i64> {
        Ok(self.returned_working.iter().filter(|w| **w).count() as i64)
    }

    async fn list_items(&self) -> anyhow::Result<Vec<Value>> {
        Ok(self
            .items
            .iter()
            .map(|i| json!({"id": i.id, "item_type": i.item_type, "quantity": i.quantity}))
            .collect())
    }
}

pub const BROKEN_STORE_MESSAGE: &str = "relation \"stock\" does not exist";

/// Every call fails the way an unreachable or misconfigured database does.
pub struct BrokenStore;

#[async_trait]
impl StockRepository for BrokenStore {
    async fn category_totals(&self) -> anyhow::Result<Vec<CategoryTotalDto>> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }

    async fn category_totals_below(&self, _: i64) -> anyhow::Result<Vec<CategoryTotalDto>> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }

    async fn total_quantity(&self) -> anyhow::Result<Option<i64>> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }

    async fn count_requests(&self) -> anyhow::Result<i64> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }

    async fn count_out_of_stock(&self) -> anyhow::Result<i64> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }

    async fn count_repaired(&self) -> anyhow::Result<i64> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }

    async fn list_items(&self) -> anyhow::Result<Vec<Value>> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }
}

#[async_trait]
impl UserRepository for BrokenStore {
    async fn create_user(&self, _: &str, _: &str) -> Result<UserRow, CreateUserError> {
        Err(CreateUserError::Store(anyhow::anyhow!(BROKEN_STORE_MESSAGE)))
    }

    async fn find_by_username(&self, _: &str) -> anyhow::Result<Option<UserRow>> {
        anyhow::bail!(BROKEN_STORE_MESSAGE)
    }
}

/// Mirrors the UNIQUE constraint on `app_users.username`.
#[derive(Default)]
pub struct MemoryUsers {
    pub rows: Mutex<Vec<UserRow>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserRow, CreateUserError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.username == username) {
            return Err(CreateUserError::UsernameTaken);
        }
        let row = UserRow {
            id: rows.len() as i64 + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.username == username).cloned())
    }
}

pub fn config(pairs: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned()).unwrap()
}

pub fn app_with(
    cfg: Config,
    stock: Arc<dyn StockRepository>,
    users: Arc<dyn UserRepository>,
) -> Router {
    let services = AppServices::new(
        stock,
        users,
        Arc::new(Argon2CredentialHasher::new(64, 1).unwrap()),
        Arc::new(JwtTokenIssuer::new(JWT_SECRET, cfg.jwt_expires_secs)),
    );
    stockroom::presentation::http::router(AppContext::new(cfg, services))
}

pub fn app(stock: Arc<dyn StockRepository>, users: Arc<dyn UserRepository>) -> Router {
    app_with(config(&[]), stock, users)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
