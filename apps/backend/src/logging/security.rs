use tracing::{info, warn};

use crate::auth::credentials::Role;
use crate::logging::pii::mask_identifier;
use crate::trace_ctx;

/// Log a security-relevant login failure event.
pub fn login_failed(reason: &str, identifier: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        identifier = %mask_identifier(identifier),
        reason,
        "Authentication failure"
    );
}

/// Log a successful login.
pub fn login_succeeded(identifier: &str, role: Role) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_LOGIN_SUCCEEDED",
        %trace_id,
        identifier = %mask_identifier(identifier),
        role = %role,
        "Authentication success"
    );
}

/// Log a rejected bearer token.
pub fn token_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        "Bearer token rejected"
    );
}

/// Log a security-relevant rate-limit event.
pub fn rate_limit_hit(endpoint: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_RATE_LIMIT_HIT",
        %trace_id,
        endpoint,
        "Rate limit exceeded"
    );
}
