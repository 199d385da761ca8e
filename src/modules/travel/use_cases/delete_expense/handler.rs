use std::sync::Arc;

use crate::modules::travel::core::ports::{ExpenseRepository, StoreError};
use crate::shared::application::errors::ApplicationError;

pub struct DeleteExpenseHandler<TExpenses>
where
    TExpenses: ExpenseRepository + 'static,
{
    expenses: Arc<TExpenses>,
}

impl<TExpenses> DeleteExpenseHandler<TExpenses>
where
    TExpenses: ExpenseRepository + 'static,
{
    pub fn new(expenses: Arc<TExpenses>) -> Self {
        Self { expenses }
    }

    pub async fn handle(&self, expense_id: &str) -> Result<(), ApplicationError> {
        match self.expenses.delete(expense_id).await {
            Ok(()) => {
                tracing::info!(%expense_id, "expense deleted");
                Ok(())
            }
            Err(StoreError::Missing { entity, id }) => Err(ApplicationError::not_found(entity, id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod delete_expense_handler_tests {
    use super::*;
    use crate::modules::travel::adapters::outbound::in_memory_store::InMemoryTravelStore;
    use crate::tests::fixtures::expenses::ExpenseBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_the_expense() {
        let store = Arc::new(InMemoryTravelStore::new());
        store
            .insert(ExpenseBuilder::new().expense_id("e-1").build())
            .await
            .unwrap();
        DeleteExpenseHandler::new(store.clone())
            .handle("e-1")
            .await
            .expect("handle failed");
        assert!(store.get("e-1").await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_expense() {
        let result = DeleteExpenseHandler::new(Arc::new(InMemoryTravelStore::new()))
            .handle("missing")
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::NotFound { entity: "expense", .. })
        ));
    }
}
