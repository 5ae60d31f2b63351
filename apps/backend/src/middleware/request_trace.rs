//! Trace id assignment, the outermost layer of the middleware stack.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::trace_ctx::{self, TraceId};

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Trace id of `req` as stored by [`RequestTrace`], or `"unknown"` when the
/// middleware is not installed.
pub fn request_trace_id(req: &ServiceRequest) -> String {
    req.extensions()
        .get::<TraceId>()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Gives every request a fresh [`TraceId`].
///
/// The id goes into request extensions, is current in [`trace_ctx`] while
/// the request runs, and is returned in the `x-trace-id` header on every
/// response, errors included.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = TraceId::generate();
        req.extensions_mut().insert(id.clone());

        let header_value = HeaderValue::from_str(id.as_str())
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
        let fut = trace_ctx::scope(id, self.service.call(req));

        Box::pin(async move {
            let mut res = fut.await?;
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), header_value);
            Ok(res)
        })
    }
}
