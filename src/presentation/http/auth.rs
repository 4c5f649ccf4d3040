use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/register", tag = "Auth", request_body = RegisterRequest, responses(
    (status = 201, body = MessageResponse),
    (status = 409, body = ErrorBody),
    (status = 500, body = ErrorBody)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let repo = ctx.user_repo();
    let hasher = ctx.hasher();
    let uc = RegisterUc {
        repo: repo.as_ref(),
        hasher: hasher.as_ref(),
    };
    let dto = RegisterDto {
        username: req.username,
        password: req.password,
    };
    uc.execute(&dto).await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// The token is returned in the body only; no endpoint here requires it.
#[utoipa::path(post, path = "/api/login", tag = "Auth", request_body = LoginRequest, responses(
    (status = 200, body = LoginResponse),
    (status = 401, body = ErrorBody),
    (status = 500, body = ErrorBody)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = ctx.user_repo();
    let hasher = ctx.hasher();
    let tokens = ctx.token_issuer();
    let uc = LoginUc {
        repo: repo.as_ref(),
        hasher: hasher.as_ref(),
        tokens: tokens.as_ref(),
    };
    let dto = LoginDto {
        username: req.username,
        password: req.password,
    };
    let outcome = uc.execute(&dto).await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: outcome.token,
    }))
}
