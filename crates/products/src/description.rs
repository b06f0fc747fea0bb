//! Product description generation.

use ecom_core::{ServiceFault, ServiceResult};

use crate::Product;

/// Writes marketing copy for a product.
pub trait DescriptionGenerator: Send + Sync {
    fn describe(&self, product: &Product) -> ServiceResult<String>;
}

/// Deterministic, template-based generator: the same product always yields
/// the same text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateDescriptionGenerator;

impl DescriptionGenerator for TemplateDescriptionGenerator {
    fn describe(&self, product: &Product) -> ServiceResult<String> {
        let name = product.name.trim();
        if name.is_empty() {
            return Err(ServiceFault::validation(
                "product name is required to generate a description",
            ));
        }

        let mut text = name.to_string();
        match product.category.trim() {
            "" => text.push_str(" is a dependable everyday product"),
            category => {
                text.push_str(" is part of our ");
                text.push_str(category);
                text.push_str(" range");
            }
        }
        if let Some(price) = product.price {
            text.push_str(&format!(", priced at {}.{:02}", price / 100, price % 100));
        }
        text.push('.');

        if product.quantity > 0 {
            text.push_str(&format!(" {} in stock and ready to ship.", product.quantity));
        } else {
            text.push_str(" Currently out of stock.");
        }

        Ok(text)
    }
}
