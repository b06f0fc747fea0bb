//! HTTP API: the product endpoint gateway.
//!
//! Routing, identity extraction, per-route visibility policy, and mapping of
//! product-service results onto HTTP responses. All product logic lives
//! behind [`ecom_products::ProductApplication`].

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
