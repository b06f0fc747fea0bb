//! Route-level visibility enforcement.
//!
//! Each route carries its own [`Visibility`]; this layer evaluates it before
//! the handler (and therefore the product service) is reached.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use ecom_auth::{authorize, AuthzError, Visibility};

use crate::context::PrincipalContext;

/// Reject the request unless the caller satisfies `visibility`.
///
/// Rejections carry no body: 401 without an identity, 403 without the role.
pub async fn enforce_visibility(
    State(visibility): State<Visibility>,
    req: Request,
    next: Next,
) -> Response {
    let principal = req
        .extensions()
        .get::<PrincipalContext>()
        .map(PrincipalContext::to_principal);

    match authorize(&visibility, principal.as_ref()) {
        Ok(()) => next.run(req).await,
        Err(AuthzError::Unauthenticated) => {
            tracing::debug!(path = %req.uri().path(), "rejected anonymous caller");
            StatusCode::UNAUTHORIZED.into_response()
        }
        Err(e @ AuthzError::Forbidden(_)) => {
            tracing::debug!(
                path = %req.uri().path(),
                principal_id = ?principal.as_ref().map(|p| p.principal_id.as_str()),
                "{e}"
            );
            StatusCode::FORBIDDEN.into_response()
        }
    }
}
