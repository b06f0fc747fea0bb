use std::sync::Arc;

use ecom_products::{InMemoryProductApplication, ProductApplication};

/// Collaborators available to handlers.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductApplication>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductApplication>) -> Self {
        Self { products }
    }

    /// Dev/test wiring backed by the in-memory product service.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductApplication::new()))
    }

    pub fn products(&self) -> &dyn ProductApplication {
        self.products.as_ref()
    }
}
