//! `ecom-auth`: pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the API layer
//! turns bearer tokens into [`Principal`]s and asks [`authorize`] whether a
//! route's [`Visibility`] admits them.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;

pub use authorize::{authorize, AuthzError, Principal, Visibility};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use principal::PrincipalId;
pub use roles::Role;
