use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::travel::core::ports::{CatalogRepository, ExpenseRepository, TripRepository};
use crate::modules::travel::use_cases::list_expenses::projection::ExpenseView;
use crate::shared::application::errors::ApplicationError;

pub struct ListExpensesHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListExpensesHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Newest first. With a `trip_id`, only that trip's expenses.
    pub async fn handle(&self, trip_id: Option<&str>) -> Result<Vec<ExpenseView>, ApplicationError> {
        let expenses = match trip_id {
            Some(trip_id) => self.store.list_by_trip(trip_id).await?,
            None => ExpenseRepository::list(&*self.store).await?,
        };

        let destinations: HashMap<String, String> = TripRepository::list(&*self.store)
            .await?
            .into_iter()
            .map(|t| (t.trip_id, t.main_destination))
            .collect();
        let categories: HashMap<String, String> = self
            .store
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.category_id, c.name))
            .collect();
        let payment_types: HashMap<String, String> = self
            .store
            .list_payment_types()
            .await?
            .into_iter()
            .map(|p| (p.payment_type_id, p.name))
            .collect();

        Ok(expenses
            .into_iter()
            .map(|e| {
                let destination = destinations.get(&e.trip_id).cloned();
                let category = categories.get(&e.category_id).cloned();
                let payment_type = payment_types.get(&e.payment_type_id).cloned();
                ExpenseView::from_expense(e, destination, category, payment_type)
            })
            .collect())
    }
}
