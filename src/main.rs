use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use stockroom::bootstrap::app_context::{AppContext, AppServices};
use stockroom::bootstrap::config::Config;
use stockroom::infrastructure::crypto::jwt::JwtTokenIssuer;
use stockroom::infrastructure::crypto::password::Argon2CredentialHasher;
use stockroom::infrastructure::db::repositories::stock_repository_sqlx::SqlxStockRepository;
use stockroom::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "stockroom=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        db_max_connections = cfg.db_max_connections,
        jwt_expires_secs = cfg.jwt_expires_secs,
        low_stock_threshold = cfg.low_stock_threshold,
        is_production = cfg.is_production,
        "Starting stockroom backend"
    );

    // Database
    let pool =
        stockroom::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections)
            .await?;
    info!("Connected to database");

    let hasher = Arc::new(Argon2CredentialHasher::new(
        cfg.password_hash_memory_kib,
        cfg.password_hash_iterations,
    )?);
    let services = AppServices::new(
        Arc::new(SqlxStockRepository::new(pool.clone())),
        Arc::new(SqlxUserRepository::new(pool)),
        hasher,
        Arc::new(JwtTokenIssuer::new(&cfg.jwt_secret, cfg.jwt_expires_secs)),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = stockroom::presentation::http::router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
