// CORS is restricted to the origins configured in CORS_ALLOWED_ORIGINS.

use actix_web::http::{Method, StatusCode};
use actix_web::{test, web, App};
use dispatch_auth::middleware::cors_middleware;
use dispatch_auth::routes;
use serial_test::serial;

use crate::support::fixtures::memory_state;

const SITE: &str = "https://dispatch.example.com";

#[actix_web::test]
#[serial]
async fn test_preflight_allowed_for_configured_origin() {
    std::env::set_var("CORS_ALLOWED_ORIGINS", SITE);
    let app = test::init_service(
        App::new()
            .wrap(cors_middleware())
            .app_data(web::Data::new(memory_state()))
            .configure(routes::configure),
    )
    .await;
    std::env::remove_var("CORS_ALLOWED_ORIGINS");

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/auth/login")
        .insert_header(("Origin", SITE))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(SITE)
    );
}

#[actix_web::test]
#[serial]
async fn test_unlisted_origin_gets_no_allow_header() {
    std::env::set_var("CORS_ALLOWED_ORIGINS", SITE);
    let app = test::init_service(
        App::new()
            .wrap(cors_middleware())
            .app_data(web::Data::new(memory_state()))
            .configure(routes::configure),
    )
    .await;
    std::env::remove_var("CORS_ALLOWED_ORIGINS");

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Origin", "https://evil.example.net"))
        .to_request();

    // actix-cors may reject outright or answer without the allow header.
    if let Ok(resp) = test::try_call_service(&app, req).await {
        assert!(resp
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }
}
