use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::error::ServiceError;
use crate::bootstrap::config::Config;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// Underlying failure text; omitted when error details are disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct ApiError {
    err: ServiceError,
    expose_details: bool,
}

impl ApiError {
    pub fn new(err: ServiceError, cfg: &Config) -> Self {
        Self {
            err,
            expose_details: cfg.expose_error_details,
        }
    }

    /// For `map_err` at the end of a use-case call.
    pub fn mapper(cfg: &Config) -> impl Fn(ServiceError) -> ApiError + '_ {
        move |err| ApiError::new(err, cfg)
    }

    pub fn status(&self) -> StatusCode {
        match self.err {
            ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::UsernameTaken => StatusCode::CONFLICT,
            ServiceError::DataStore(_)
            | ServiceError::UserInsert(_)
            | ServiceError::Hashing(_)
            | ServiceError::TokenSigning(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self.err {
            ServiceError::InvalidCredentials => "Invalid username or password",
            ServiceError::UsernameTaken => "Username already exists",
            ServiceError::UserInsert(_) => "Error inserting user",
            ServiceError::DataStore(_)
            | ServiceError::Hashing(_)
            | ServiceError::TokenSigning(_) => "Server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self.err, source = ?self.err, "request_failed");
            Some(self.err.to_string())
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.err, "request_rejected");
            None
        };
        let body = ErrorBody {
            message: self.message().to_string(),
            error: detail.filter(|_| self.expose_details),
        };
        (status, Json(body)).into_response()
    }
}
