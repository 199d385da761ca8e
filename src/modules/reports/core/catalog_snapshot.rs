use std::collections::HashMap;

use crate::modules::travel::core::catalog::{Category, PaymentType};

/// Categories and payment types as they were when a report was requested,
/// indexed by id.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    categories: HashMap<String, Category>,
    payment_types: HashMap<String, PaymentType>,
}

impl CatalogSnapshot {
    pub fn new(categories: Vec<Category>, payment_types: Vec<PaymentType>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|c| (c.category_id.clone(), c))
                .collect(),
            payment_types: payment_types
                .into_iter()
                .map(|p| (p.payment_type_id.clone(), p))
                .collect(),
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.get(category_id)
    }

    pub fn payment_type(&self, payment_type_id: &str) -> Option<&PaymentType> {
        self.payment_types.get(payment_type_id)
    }
}
