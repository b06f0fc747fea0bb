//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the product service handle shared by handlers
//! - `routes/`: route table, policy per route, handlers
//! - `errors.rs`: fault → response mapping

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use ecom_auth::{Hs256JwtValidator, JwtValidator};

use crate::config::ApiConfig;
use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig, services: AppServices) -> Router {
    let mut validator = Hs256JwtValidator::new(config.jwt_secret.as_bytes());
    if let Some(issuer) = &config.jwt_issuer {
        validator = validator.with_issuer(issuer);
    }
    if let Some(audience) = &config.jwt_audience {
        validator = validator.with_audience(audience);
    }
    let jwt: Arc<dyn JwtValidator> = Arc::new(validator);
    let auth_state = middleware::AuthState { jwt };

    routes::router(&config.admin_role)
        .route("/health", get(routes::system::health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    auth_state,
                    middleware::identity_middleware,
                ))
                .layer(Extension(Arc::new(services))),
        )
}
