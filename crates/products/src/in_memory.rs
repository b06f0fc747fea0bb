use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use ecom_core::{ProductId, ServiceFault, ServiceResult};

use crate::{DescriptionGenerator, Product, ProductApplication, TemplateDescriptionGenerator};

/// In-memory product application service for tests/dev.
///
/// Products are keyed by their UUIDv7 id, so listing returns them in
/// creation order. Locks are never held across an await.
#[derive(Debug)]
pub struct InMemoryProductApplication<G = TemplateDescriptionGenerator> {
    inner: RwLock<BTreeMap<ProductId, Product>>,
    generator: G,
}

impl InMemoryProductApplication {
    pub fn new() -> Self {
        Self::with_generator(TemplateDescriptionGenerator)
    }
}

impl Default for InMemoryProductApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> InMemoryProductApplication<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            generator,
        }
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, BTreeMap<ProductId, Product>>> {
        self.inner
            .read()
            .map_err(|_| ServiceFault::unavailable("product store is unavailable"))
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, BTreeMap<ProductId, Product>>> {
        self.inner
            .write()
            .map_err(|_| ServiceFault::unavailable("product store is unavailable"))
    }
}

fn ensure_quantity(quantity: i32) -> ServiceResult<()> {
    if quantity < 0 {
        return Err(ServiceFault::validation(format!(
            "quantity must not be negative (got {quantity})"
        )));
    }
    Ok(())
}

#[async_trait]
impl<G> ProductApplication for InMemoryProductApplication<G>
where
    G: DescriptionGenerator,
{
    async fn list(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn get(&self, id: &ProductId) -> ServiceResult<Option<Product>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn add(&self, mut product: Product) -> ServiceResult<ProductId> {
        if product.name.trim().is_empty() {
            return Err(ServiceFault::validation("product name is required"));
        }
        ensure_quantity(product.quantity)?;

        let id = ProductId::generate();
        product.id = id.clone();
        self.write()?.insert(id.clone(), product);

        tracing::debug!(product_id = %id, "product stored");
        Ok(id)
    }

    async fn update_quantity(&self, id: &ProductId, quantity: i32) -> ServiceResult<i32> {
        ensure_quantity(quantity)?;

        let mut map = self.write()?;
        let product = map
            .get_mut(id)
            .ok_or_else(|| ServiceFault::not_found(format!("product '{id}' not found")))?;
        product.quantity = quantity;
        Ok(product.quantity)
    }

    async fn generate_description(&self, mut product: Product) -> ServiceResult<Product> {
        product.description = self.generator.describe(&product)?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let app = InMemoryProductApplication::new();
        assert!(app.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_assigns_id_and_ignores_client_id() {
        let app = InMemoryProductApplication::new();
        let mut input = Product::new("Desk Lamp").with_quantity(3);
        input.id = ProductId::new("client-chosen");

        let id = app.add(input).await.unwrap();
        assert_ne!(id.as_str(), "client-chosen");
        assert!(app.get(&ProductId::new("client-chosen")).await.unwrap().is_none());

        let stored = app.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "Desk Lamp");
        assert_eq!(stored.quantity, 3);
    }

    #[tokio::test]
    async fn add_rejects_blank_name() {
        let app = InMemoryProductApplication::new();
        let err = app.add(Product::new(" ")).await.unwrap_err();
        assert_eq!(err, ServiceFault::validation("product name is required"));
        assert!(app.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_in_creation_order() {
        let app = InMemoryProductApplication::new();
        let a = app.add(Product::new("A")).await.unwrap();
        let b = app.add(Product::new("B")).await.unwrap();
        let ids: Vec<_> = app.list().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn update_quantity_returns_stored_value() {
        let app = InMemoryProductApplication::new();
        let id = app.add(Product::new("Mug")).await.unwrap();
        assert_eq!(app.update_quantity(&id, 5).await.unwrap(), 5);
        assert_eq!(app.get(&id).await.unwrap().unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn update_quantity_faults() {
        let app = InMemoryProductApplication::new();
        let missing = app.update_quantity(&ProductId::new("nope"), 1).await.unwrap_err();
        assert_eq!(missing, ServiceFault::not_found("product 'nope' not found"));

        let id = app.add(Product::new("Mug")).await.unwrap();
        let negative = app.update_quantity(&id, -1).await.unwrap_err();
        assert!(matches!(negative, ServiceFault::Validation(_)));
        assert_eq!(app.get(&id).await.unwrap().unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn generate_description_does_not_store() {
        let app = InMemoryProductApplication::new();
        let out = app
            .generate_description(Product::new("Mug").with_quantity(2))
            .await
            .unwrap();
        assert_eq!(out.name, "Mug");
        assert!(!out.description.is_empty());
        assert!(app.list().await.unwrap().is_empty());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use ecom_core::ProductId;

        use crate::{InMemoryProductApplication, Product, ProductApplication};

        fn block_on<F: std::future::Future>(f: F) -> F::Output {
            tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap()
                .block_on(f)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: whatever `add` accepts, `get` returns unchanged apart from the id.
            #[test]
            fn add_then_get_round_trips(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                category in "[A-Za-z]{0,12}",
                price in proptest::option::of(0u64..1_000_000),
                quantity in 0i32..10_000
            ) {
                let app = InMemoryProductApplication::new();
                let input = Product { price, ..Product::new(name).with_category(category).with_quantity(quantity) };

                let stored = block_on(async {
                    let id = app.add(input.clone()).await.unwrap();
                    app.get(&id).await.unwrap().unwrap()
                });

                prop_assert_eq!(Product { id: ProductId::default(), ..stored }, input);
            }

            /// Property: description generation is deterministic.
            #[test]
            fn generate_description_is_deterministic(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                quantity in -5i32..50
            ) {
                let app = InMemoryProductApplication::new();
                let input = Product::new(name).with_quantity(quantity);
                let (a, b) = block_on(async {
                    (
                        app.generate_description(input.clone()).await.unwrap(),
                        app.generate_description(input.clone()).await.unwrap(),
                    )
                });
                prop_assert_eq!(a, b);
            }
        }
    }
}
