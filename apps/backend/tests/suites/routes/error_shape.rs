// Every AppError renders as the same {success: false, message} envelope,
// and operator-facing detail never reaches the body.

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use dispatch_auth::error::INTERNAL_MESSAGE;
use dispatch_auth::AppError;

use crate::common::assert_failure_envelope;
use crate::support::create_test_app;
use crate::support::fixtures::memory_state;

async fn misconfigured() -> Result<HttpResponse, AppError> {
    Err(AppError::misconfigured_signing("BACKEND_JWT_SECRET rotated to empty value"))
}

async fn internal() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("credential store poisoned at /var/lib/dispatch"))
}

async fn invalid() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid_input("Identifier and secret are required"))
}

async fn not_implemented() -> Result<HttpResponse, AppError> {
    Err(AppError::not_implemented("Token refresh"))
}

fn error_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/_test/misconfigured", web::get().to(misconfigured))
        .route("/_test/internal", web::get().to(internal))
        .route("/_test/invalid", web::get().to(invalid))
        .route("/_test/not-implemented", web::get().to(not_implemented));
}

#[actix_web::test]
async fn test_operator_facing_errors_are_generic() {
    let app = create_test_app(memory_state())
        .with_routes(error_routes)
        .build()
        .await;

    for (uri, code) in [
        ("/_test/misconfigured", "MISCONFIGURED_SIGNING"),
        ("/_test/internal", "INTERNAL"),
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_failure_envelope(
            resp,
            StatusCode::INTERNAL_SERVER_ERROR,
            code,
            INTERNAL_MESSAGE,
        )
        .await;
    }
}

#[actix_web::test]
async fn test_user_facing_errors_keep_their_message() {
    let app = create_test_app(memory_state())
        .with_routes(error_routes)
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/_test/invalid").to_request(),
    )
    .await;
    assert_failure_envelope(
        resp,
        StatusCode::BAD_REQUEST,
        "INVALID_INPUT",
        "Identifier and secret are required",
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/_test/not-implemented").to_request(),
    )
    .await;
    assert_failure_envelope(
        resp,
        StatusCode::NOT_IMPLEMENTED,
        "NOT_IMPLEMENTED",
        "Token refresh is not supported",
    )
    .await;
}

#[actix_web::test]
async fn test_error_content_type_is_json() {
    let app = create_test_app(memory_state())
        .with_routes(error_routes)
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/_test/internal").to_request(),
    )
    .await;

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "got {content_type}"
    );
}
