//! `ecom-core`: shared building blocks for the product service.
//!
//! This crate contains **pure** primitives (no HTTP, no storage).

pub mod error;
pub mod id;

pub use error::{ServiceFault, ServiceResult};
pub use id::ProductId;
