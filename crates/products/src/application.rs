use async_trait::async_trait;

use ecom_core::{ProductId, ServiceResult};

use crate::Product;

/// Product application service: the only thing the HTTP layer talks to.
///
/// Each operation returns an explicit result; faults carry a message that is
/// safe to show to the caller.
#[async_trait]
pub trait ProductApplication: Send + Sync {
    /// All products. An empty catalog is `Ok(vec![])`.
    async fn list(&self) -> ServiceResult<Vec<Product>>;

    /// `Ok(None)` when no product has this id.
    async fn get(&self, id: &ProductId) -> ServiceResult<Option<Product>>;

    /// Store a new product and return the id assigned to it.
    async fn add(&self, product: Product) -> ServiceResult<ProductId>;

    /// Set the on-hand quantity and return the stored value.
    async fn update_quantity(&self, id: &ProductId, quantity: i32) -> ServiceResult<i32>;

    /// Return `product` with a generated description filled in.
    async fn generate_description(&self, product: Product) -> ServiceResult<Product>;
}
