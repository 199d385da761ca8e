use std::sync::Arc;

use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::core::ports::{CatalogRepository, ExpenseRepository, TripRepository};
use crate::modules::travel::use_cases::record_expense::command::ExpenseDetails;
use crate::modules::travel::use_cases::record_expense::decide::decide_update_expense;
use crate::modules::travel::use_cases::record_expense::handler::load_references;
use crate::shared::application::errors::ApplicationError;

pub struct UpdateExpenseHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateExpenseHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        expense_id: &str,
        details: ExpenseDetails,
    ) -> Result<Expense, ApplicationError> {
        let current = ExpenseRepository::get(&*self.store, expense_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("expense", expense_id))?;

        let references = load_references(&*self.store, &details).await?;
        let expense = decide_update_expense(&current, details, references)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        ExpenseRepository::update(&*self.store, expense.clone()).await?;
        tracing::info!(%expense_id, amount = %expense.amount, "expense updated");
        Ok(expense)
    }
}
