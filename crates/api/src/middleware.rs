use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use ecom_auth::JwtValidator;

use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Attach the caller's identity to the request, if it has one.
///
/// Never rejects: a missing or invalid token leaves the request anonymous and
/// the per-route policy decides what anonymous callers may do.
pub async fn identity_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = match extract_bearer(req.headers()) {
        Bearer::Absent => None,
        Bearer::Malformed => {
            tracing::debug!("ignoring malformed authorization header");
            None
        }
        Bearer::Token(token) => match state.jwt.validate(token, Utc::now()) {
            Ok(claims) => Some(PrincipalContext::from_claims(claims)),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid bearer token");
                None
            }
        },
    };

    if let Some(principal) = principal {
        req.extensions_mut().insert(principal);
    }

    next.run(req).await
}

enum Bearer<'a> {
    Absent,
    Malformed,
    Token(&'a str),
}

fn extract_bearer(headers: &HeaderMap) -> Bearer<'_> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Bearer::Absent;
    };

    let Ok(header) = header.to_str() else {
        return Bearer::Malformed;
    };

    match header.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Bearer::Token(token),
        _ => Bearer::Malformed,
    }
}
