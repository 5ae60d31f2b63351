//! Assertions for the `{success: false, message}` failure envelope.
//!
//! Kept free of backend types so the contract is checked from the outside.

use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::test;
use serde::Deserialize;

/// Failure body as a client sees it. Unknown fields are an error so the
/// envelope cannot quietly grow.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeLike {
    pub success: bool,
    pub message: String,
}

/// Read the `x-trace-id` header, asserting it is present and non-empty.
pub fn trace_id(headers: &HeaderMap) -> String {
    let value = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!value.is_empty(), "x-trace-id header should not be empty");
    value.to_string()
}

/// Assert a failure response: status, `x-error-code`, trace header, the
/// `WWW-Authenticate` rule for 401, and the exact envelope body.
///
/// Returns the parsed envelope for further checks.
pub async fn assert_failure_envelope<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) -> EnvelopeLike
where
    B: actix_web::body::MessageBody,
{
    assert_eq!(resp.status(), expected_status, "unexpected status");

    let headers = resp.headers().clone();
    trace_id(&headers);

    let code = headers
        .get("x-error-code")
        .and_then(|v| v.to_str().ok())
        .expect("x-error-code header should be present");
    assert_eq!(code, expected_code);

    let www_auth = headers.get("www-authenticate").and_then(|v| v.to_str().ok());
    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(www_auth, Some("Bearer"), "401 must carry WWW-Authenticate");
    } else {
        assert!(
            www_auth.is_none(),
            "{expected_status} must not carry WWW-Authenticate"
        );
    }

    let body = test::read_body(resp).await;
    let envelope: EnvelopeLike = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "failure body is not an envelope ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    });

    assert!(!envelope.success, "failure envelope must have success=false");
    assert_eq!(envelope.message, expected_message);

    envelope
}
