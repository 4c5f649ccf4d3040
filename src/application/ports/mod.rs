pub mod credential_hasher;
pub mod stock_repository;
pub mod token_issuer;
pub mod user_repository;
