//! Rate limiting for the login endpoint.
//!
//! Authentication endpoints: 5 requests per minute per client IP. Health
//! checks are exempt.

use std::time::Duration;

use actix_extensible_rate_limit::backend::{SimpleInputFunctionBuilder, SimpleOutput};
use actix_web::{HttpResponse, ResponseError};

use crate::error::AppError;
use crate::logging::security;

pub const AUTH_WINDOW: Duration = Duration::from_secs(60);
pub const AUTH_MAX_REQUESTS: u64 = 5;

/// Input function config for authentication endpoints, keyed by real client IP.
pub fn auth_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(AUTH_WINDOW, AUTH_MAX_REQUESTS).real_ip_key()
}

/// Denied response in the standard failure envelope.
pub fn rate_limited_response(_output: &SimpleOutput) -> HttpResponse {
    security::rate_limit_hit("/api/auth");
    AppError::rate_limited().error_response()
}
