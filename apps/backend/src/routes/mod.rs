use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_web::web;

pub mod auth;
pub mod health;

/// Register every route without rate limiting.
///
/// Used by tests that exercise endpoint behavior directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
}

/// Register every route with the login limiter in place, as served in
/// production.
pub fn configure_with_rate_limit(cfg: &mut web::ServiceConfig, backend: InMemoryBackend) {
    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope("/api/auth")
            .configure(|cfg| auth::configure_rate_limited_routes(cfg, backend)),
    );
}
