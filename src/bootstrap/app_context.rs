use std::sync::Arc;

use crate::application::ports::credential_hasher::CredentialHasher;
use crate::application::ports::stock_repository::StockRepository;
use crate::application::ports::token_issuer::TokenIssuer;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    stock_repo: Arc<dyn StockRepository>,
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl AppServices {
    pub fn new(
        stock_repo: Arc<dyn StockRepository>,
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn CredentialHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            stock_repo,
            user_repo,
            hasher,
            token_issuer,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn stock_repo(&self) -> Arc<dyn StockRepository> {
        self.services.stock_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn hasher(&self) -> Arc<dyn CredentialHasher> {
        self.services.hasher.clone()
    }

    pub fn token_issuer(&self) -> Arc<dyn TokenIssuer> {
        self.services.token_issuer.clone()
    }
}
