//! Per-request trace ids.
//!
//! [`RequestTrace`](crate::middleware::RequestTrace) mints a [`TraceId`],
//! stores it in the request extensions and runs the rest of the request
//! inside [`scope`]. Handlers, extractors and error rendering read it back
//! with [`trace_id`].

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

const UNKNOWN: &str = "unknown";

task_local! {
    static CURRENT: TraceId;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);

impl TraceId {
    /// Fresh UUID v4 id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TraceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Trace id of the request this task is serving, or `"unknown"`.
pub fn trace_id() -> String {
    CURRENT
        .try_with(|id| id.0.clone())
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `id` as the current trace id.
pub async fn scope<F>(id: TraceId, future: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(id, future).await
}
