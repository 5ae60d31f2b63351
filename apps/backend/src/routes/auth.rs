use std::time::SystemTime;

use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::authenticator::AuthenticatedUser;
use crate::error::AppError;
use crate::extractors::bearer::VerifiedClaims;
use crate::extractors::validated_json::ValidatedJson;
use crate::middleware::rate_limit::{auth_rate_limit_config, rate_limited_response};
use crate::services::login::login as run_login;
use crate::state::app_state::AppState;

/// Absent fields deserialize to empty strings so they are rejected as
/// missing input rather than as malformed JSON.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AuthenticatedUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub success: bool,
    pub user: AuthenticatedUser,
    pub expires_at: i64,
}

/// Check submitted credentials and return a signed token on success.
async fn login(
    req: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let success = run_login(
        &app_state.authenticator,
        &app_state.issuer,
        &req.identifier,
        &req.secret,
        SystemTime::now(),
    )?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token: success.token,
        user: success.user,
    }))
}

/// Echo the verified claims of the caller's bearer token.
async fn me(claims: VerifiedClaims) -> Result<HttpResponse, AppError> {
    let VerifiedClaims(claims) = claims;

    Ok(HttpResponse::Ok().json(MeResponse {
        success: true,
        user: claims.user(),
        expires_at: claims.exp,
    }))
}

async fn session(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = app_state.sessions.current()?;
    match session {}
}

fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)))
        .service(web::resource("/session").route(web::get().to(session)));
}

/// Auth routes without the login limiter.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
    configure_token_routes(cfg);
}

/// Auth routes with `/login` behind the per-IP limiter.
///
/// `backend` must be created once and cloned into every worker so all
/// workers count against the same window.
pub fn configure_rate_limited_routes(cfg: &mut web::ServiceConfig, backend: InMemoryBackend) {
    let limiter = RateLimiter::builder(backend, auth_rate_limit_config().build())
        .add_headers()
        .request_denied_response(rate_limited_response)
        .build();

    cfg.service(
        web::resource("/login")
            .wrap(limiter)
            .route(web::post().to(login)),
    );
    configure_token_routes(cfg);
}
