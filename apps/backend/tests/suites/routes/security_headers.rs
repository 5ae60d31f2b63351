// Security headers apply to every response, errors included.

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::support::create_test_app;
use crate::support::fixtures::{memory_state, ADMIN_ID, ADMIN_SECRET};

const EXPECTED: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
    ("cache-control", "no-store"),
];

fn assert_security_headers(headers: &actix_web::http::header::HeaderMap) {
    for (name, value) in EXPECTED {
        assert_eq!(
            headers.get(*name).and_then(|v| v.to_str().ok()),
            Some(*value),
            "{name} should be {value}"
        );
    }
    assert!(headers.contains_key("strict-transport-security"));
    assert!(headers.contains_key("content-security-policy"));
}

#[actix_web::test]
async fn test_security_headers_on_successful_login() {
    let app = create_test_app(memory_state()).build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"identifier": ADMIN_ID, "secret": ADMIN_SECRET}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_security_headers(resp.headers());
}

#[actix_web::test]
async fn test_security_headers_on_errors_and_health() {
    let app = create_test_app(memory_state()).build().await;

    let me = test::call_service(&app, test::TestRequest::get().uri("/api/auth/me").to_request()).await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
    assert_security_headers(me.headers());

    let health =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_security_headers(health.headers());
}
