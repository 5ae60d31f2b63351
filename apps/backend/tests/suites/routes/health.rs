use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::common::trace_id;
use crate::support::create_test_app;
use crate::support::fixtures::memory_state;

#[actix_web::test]
async fn test_health_reports_ok() {
    let app = create_test_app(memory_state()).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    trace_id(resp.headers());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));
}

#[actix_web::test]
async fn test_each_request_gets_its_own_trace_id() {
    let app = create_test_app(memory_state()).build().await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_ne!(trace_id(first.headers()), trace_id(second.headers()));
}
