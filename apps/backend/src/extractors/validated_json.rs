use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::config::app::DEFAULT_MAX_JSON_PAYLOAD_SIZE;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Caller-facing message for any body that cannot be read or parsed.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Maximum accepted body size, registered as app data.
#[derive(Debug, Clone, Copy)]
pub struct JsonBodyLimit(pub usize);

impl Default for JsonBodyLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_JSON_PAYLOAD_SIZE)
    }
}

/// JSON extractor whose failures become `AppError::InvalidInput` (400).
///
/// The parse detail is logged at debug level only; callers always see the
/// same generic message.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let limit = req
            .app_data::<JsonBodyLimit>()
            .copied()
            .unwrap_or_default()
            .0;

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::invalid_input(INVALID_BODY_MESSAGE)
                })?;
                if body.len() + chunk.len() > limit {
                    debug!(trace_id = %trace_id, limit, "Request body over limit");
                    return Err(AppError::invalid_input(INVALID_BODY_MESSAGE));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    category = classify_json_error(&e),
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::invalid_input(INVALID_BODY_MESSAGE)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn classify_json_error(error: &JsonError) -> &'static str {
    match error.classify() {
        serde_json::error::Category::Syntax => "syntax",
        serde_json::error::Category::Eof => "eof",
        serde_json::error::Category::Data => "data",
        serde_json::error::Category::Io => "io",
    }
}
