// Server-side sessions are an explicitly absent capability.

use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::assert_failure_envelope;
use crate::support::create_test_app;
use crate::support::fixtures::memory_state;

#[actix_web::test]
async fn test_session_endpoint_is_not_implemented() {
    let app = create_test_app(memory_state()).build().await;

    let req = test::TestRequest::get().uri("/api/auth/session").to_request();
    let resp = test::call_service(&app, req).await;

    assert_failure_envelope(
        resp,
        StatusCode::NOT_IMPLEMENTED,
        "NOT_IMPLEMENTED",
        "Server-side session management is not supported",
    )
    .await;
}
