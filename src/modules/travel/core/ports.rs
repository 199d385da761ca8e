// Ports describe what the travel module needs from storage, without
// implementing it.
//
// - Handlers and report use cases code against these traits only.
// - Adapters implement them; the in memory store backs tests and local runs.
// - Reads return owned snapshots. Nothing handed out aliases storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::travel::core::catalog::{Category, PaymentType};
use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::core::trip::Trip;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    Missing { entity: &'static str, id: String },

    #[error("{entity} {id} is used by {count} expense(s)")]
    InUse {
        entity: &'static str,
        id: String,
        count: usize,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn insert(&self, trip: Trip) -> Result<(), StoreError>;
    async fn update(&self, trip: Trip) -> Result<(), StoreError>;
    async fn get(&self, trip_id: &str) -> Result<Option<Trip>, StoreError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Trip>, StoreError>;
    /// Removes the trip and every expense recorded against it in one step.
    /// Returns how many expenses went with it.
    async fn delete_with_expenses(&self, trip_id: &str) -> Result<usize, StoreError>;
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn insert(&self, expense: Expense) -> Result<(), StoreError>;
    async fn update(&self, expense: Expense) -> Result<(), StoreError>;
    async fn get(&self, expense_id: &str) -> Result<Option<Expense>, StoreError>;
    async fn delete(&self, expense_id: &str) -> Result<(), StoreError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Expense>, StoreError>;
    async fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>, StoreError>;
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    async fn get_category(&self, category_id: &str) -> Result<Option<Category>, StoreError>;
    async fn insert_category(&self, category: Category) -> Result<(), StoreError>;
    async fn update_category(&self, category: Category) -> Result<(), StoreError>;
    /// Removes the category unless an expense references it. The check and
    /// the removal happen in one step; a referenced row yields `InUse`.
    async fn delete_category_if_unused(&self, category_id: &str) -> Result<(), StoreError>;

    /// Ordered by name.
    async fn list_payment_types(&self) -> Result<Vec<PaymentType>, StoreError>;
    async fn get_payment_type(
        &self,
        payment_type_id: &str,
    ) -> Result<Option<PaymentType>, StoreError>;
    async fn insert_payment_type(&self, payment_type: PaymentType) -> Result<(), StoreError>;
    async fn update_payment_type(&self, payment_type: PaymentType) -> Result<(), StoreError>;
    /// Same contract as `delete_category_if_unused`.
    async fn delete_payment_type_if_unused(&self, payment_type_id: &str)
    -> Result<(), StoreError>;
}
