use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Generic message returned for every operator-facing failure.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Failure envelope returned to callers: `{success: false, message}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {detail}")]
    InvalidInput { detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidToken")]
    UnauthorizedInvalidToken,
    #[error("UnauthorizedExpiredToken")]
    UnauthorizedExpiredToken,
    #[error("Rate limited")]
    RateLimited,
    #[error("Not implemented: {capability}")]
    NotImplemented { capability: &'static str },
    #[error("Misconfigured signing: {detail}")]
    MisconfiguredSigning { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput { .. } => ErrorCode::InvalidInput,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::UnauthorizedMissingBearer => ErrorCode::UnauthorizedMissingBearer,
            AppError::UnauthorizedInvalidToken => ErrorCode::UnauthorizedInvalidToken,
            AppError::UnauthorizedExpiredToken => ErrorCode::UnauthorizedExpiredToken,
            AppError::RateLimited => ErrorCode::RateLimited,
            AppError::NotImplemented { .. } => ErrorCode::NotImplemented,
            AppError::MisconfiguredSigning { .. } => ErrorCode::MisconfiguredSigning,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Caller-facing message. Operator-facing variants never leak their detail.
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidInput { detail } => detail.clone(),
            AppError::Unauthorized => "Invalid credentials".to_string(),
            AppError::UnauthorizedMissingBearer => "Missing or malformed Bearer token".to_string(),
            AppError::UnauthorizedInvalidToken => "Invalid token".to_string(),
            AppError::UnauthorizedExpiredToken => "Token expired".to_string(),
            AppError::RateLimited => "Too many requests".to_string(),
            AppError::NotImplemented { capability } => format!("{capability} is not supported"),
            AppError::MisconfiguredSigning { .. }
            | AppError::Config { .. }
            | AppError::Internal { .. } => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized
            | AppError::UnauthorizedMissingBearer
            | AppError::UnauthorizedInvalidToken
            | AppError::UnauthorizedExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            AppError::MisconfiguredSigning { .. }
            | AppError::Config { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Operator-facing errors are logged with full detail when rendered.
    pub fn is_operator_facing(&self) -> bool {
        matches!(
            self,
            AppError::MisconfiguredSigning { .. } | AppError::Config { .. } | AppError::Internal { .. }
        )
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            detail: detail.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_token() -> Self {
        Self::UnauthorizedInvalidToken
    }

    pub fn unauthorized_expired_token() -> Self {
        Self::UnauthorizedExpiredToken
    }

    pub fn rate_limited() -> Self {
        Self::RateLimited
    }

    pub fn not_implemented(capability: &'static str) -> Self {
        Self::NotImplemented { capability }
    }

    pub fn misconfigured_signing(detail: impl Into<String>) -> Self {
        Self::MisconfiguredSigning {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();

        if self.is_operator_facing() {
            let trace_id = trace_ctx::trace_id();
            error!(%trace_id, code = %code, error = %self, "Request failed with internal fault");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-error-code", code.as_str()));

        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(ErrorEnvelope {
            success: false,
            message: self.message(),
        })
    }
}
