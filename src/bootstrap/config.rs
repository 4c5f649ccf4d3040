use std::env;
use std::str::FromStr;

const DEV_JWT_SECRET: &str = "development-secret-change-me";
/// One year. Longer lifetimes are refused at startup.
pub const MAX_JWT_EXPIRES_SECS: i64 = 60 * 60 * 24 * 365;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expires_secs: i64,
    pub password_hash_iterations: u32,
    pub password_hash_memory_kib: u32,
    pub low_stock_threshold: i64,
    pub expose_error_details: bool,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_port = parse_key(&lookup, "PORT")
            .or_else(|| parse_key(&lookup, "API_PORT"))
            .unwrap_or(3000);
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "postgres://root@localhost:5432/stock_management_system".into());
        let db_max_connections = parse_key(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(10);
        // HS256 shared secret
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| DEV_JWT_SECRET.into());
        let jwt_expires_secs = parse_key(&lookup, "JWT_EXPIRES_SECS").unwrap_or(60 * 60);
        let password_hash_iterations = parse_key(&lookup, "PASSWORD_HASH_ITERATIONS")
            .unwrap_or(argon2::Params::DEFAULT_T_COST);
        let password_hash_memory_kib = parse_key(&lookup, "PASSWORD_HASH_MEMORY_KIB")
            .unwrap_or(argon2::Params::DEFAULT_M_COST);
        let low_stock_threshold = parse_key(&lookup, "LOW_STOCK_THRESHOLD").unwrap_or(5);
        let is_production = matches!(
            lookup("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );
        let expose_error_details = lookup("EXPOSE_ERROR_DETAILS")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(!is_production);

        if is_production && (jwt_secret == DEV_JWT_SECRET || jwt_secret.len() < 16) {
            anyhow::bail!("JWT_SECRET must be set to a strong secret in production");
        }
        if !(1..=MAX_JWT_EXPIRES_SECS).contains(&jwt_expires_secs) {
            anyhow::bail!("JWT_EXPIRES_SECS must be between 1 and {MAX_JWT_EXPIRES_SECS}");
        }

        Ok(Self {
            api_port,
            database_url,
            db_max_connections,
            jwt_secret,
            jwt_expires_secs,
            password_hash_iterations,
            password_hash_memory_kib,
            low_stock_threshold,
            expose_error_details,
            is_production,
        })
    }
}

fn parse_key<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
