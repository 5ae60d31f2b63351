use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use dispatch_auth::extractors::JsonBodyLimit;
use dispatch_auth::middleware::{RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan};
use dispatch_auth::routes;
use dispatch_auth::state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for test service instances wired with the production middleware
/// stack (minus CORS).
pub struct TestAppBuilder {
    state: AppState,
    rate_limit: Option<InMemoryBackend>,
    body_limit: JsonBodyLimit,
    extra_routes: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            rate_limit: None,
            body_limit: JsonBodyLimit::default(),
            extra_routes: None,
        }
    }

    /// Put `/api/auth/login` behind the production limiter.
    pub fn with_rate_limit(mut self) -> Self {
        self.rate_limit = Some(InMemoryBackend::builder().build());
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = JsonBodyLimit(limit);
        self
    }

    /// Register additional routes next to the production ones.
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.extra_routes = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let rate_limit = self.rate_limit;
        let extra_routes = self.extra_routes;

        test::init_service(
            App::new()
                .wrap(SecurityHeaders)
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .app_data(self.body_limit)
                .configure(move |cfg| {
                    if let Some(config_fn) = &extra_routes {
                        config_fn(cfg);
                    }
                    match rate_limit {
                        Some(backend) => routes::configure_with_rate_limit(cfg, backend),
                        None => routes::configure(cfg),
                    }
                }),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
