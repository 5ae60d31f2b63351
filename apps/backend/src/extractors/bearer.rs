use std::time::SystemTime;

use actix_web::dev::Payload;
use actix_web::{http::header, web, FromRequest, HttpRequest};

use crate::auth::claims::TokenClaims;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Claims of a bearer token that verified against the shared signing key.
#[derive(Debug, Clone)]
pub struct VerifiedClaims(pub TokenClaims);

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Some(token),
        _ => None,
    }
}

impl FromRequest for VerifiedClaims {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(parse_bearer)
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not found"))?;

            app_state
                .issuer
                .verify(token, SystemTime::now())
                .map(VerifiedClaims)
                .inspect_err(|e| security::token_rejected(e.code().as_str()))
        })
    }
}
