//! Products catalog module.
//!
//! Holds the product payload, the application-service contract the HTTP
//! layer delegates to, and an in-memory implementation of that contract.

pub mod application;
pub mod description;
pub mod in_memory;
pub mod product;

pub use application::ProductApplication;
pub use description::{DescriptionGenerator, TemplateDescriptionGenerator};
pub use in_memory::InMemoryProductApplication;
pub use product::Product;
