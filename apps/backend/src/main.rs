use std::sync::Arc;

use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_web::{web, App, HttpServer};
use dispatch_auth::config::{load_credentials_file, Config};
use dispatch_auth::extractors::JsonBodyLimit;
use dispatch_auth::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use dispatch_auth::routes;
use dispatch_auth::state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (set -a; . ./.env; set +a)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error_code = %e.code(), error = %e, "Startup configuration failed");
            std::process::exit(1);
        }
    };

    let store = match load_credentials_file(&config.credentials_file) {
        Ok(store) => store,
        Err(e) => {
            error!(error_code = %e.code(), error = %e, "Failed to load credentials");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        credentials = store.len(),
        "Starting dispatch-auth"
    );

    let data = web::Data::new(AppState::new(Arc::new(store), config.security));
    let body_limit = JsonBodyLimit(config.max_json_payload_size);
    let rate_limit_backend = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let rate_limit_backend = rate_limit_backend.clone();

        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(body_limit)
            .configure(|cfg| routes::configure_with_rate_limit(cfg, rate_limit_backend))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
