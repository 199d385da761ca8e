use std::sync::Arc;

use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::core::ports::{
    CatalogRepository, ExpenseRepository, StoreError, TripRepository,
};
use crate::modules::travel::use_cases::record_expense::command::{
    ExpenseDetails, ExpenseReferences, RecordExpense,
};
use crate::modules::travel::use_cases::record_expense::decide::decide_record_expense;
use crate::shared::application::errors::ApplicationError;

/// Resolves every id `details` points at against the store.
pub async fn load_references<TStore>(
    store: &TStore,
    details: &ExpenseDetails,
) -> Result<ExpenseReferences, StoreError>
where
    TStore: TripRepository + CatalogRepository + ?Sized,
{
    Ok(ExpenseReferences {
        trip_exists: TripRepository::get(store, &details.trip_id)
            .await?
            .is_some(),
        category_exists: store.get_category(&details.category_id).await?.is_some(),
        payment_type_exists: store
            .get_payment_type(&details.payment_type_id)
            .await?
            .is_some(),
    })
}

pub struct RecordExpenseHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RecordExpenseHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RecordExpense) -> Result<Expense, ApplicationError> {
        let references = load_references(&*self.store, &command.details).await?;
        let expense = decide_record_expense(command, references)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        ExpenseRepository::insert(&*self.store, expense.clone()).await?;
        tracing::info!(
            expense_id = %expense.expense_id,
            trip_id = %expense.trip_id,
            amount = %expense.amount,
            "expense recorded"
        );
        Ok(expense)
    }
}

#[cfg(test)]
mod record_expense_handler_tests {
    use super::*;
    use crate::modules::travel::adapters::outbound::in_memory_store::InMemoryTravelStore;
    use crate::modules::travel::use_cases::record_expense::decide::DecideError;
    use crate::tests::fixtures::commands::RecordExpenseBuilder;
    use crate::tests::fixtures::trips::TripBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    async fn store_with_trip() -> Arc<InMemoryTravelStore> {
        let store = Arc::new(InMemoryTravelStore::new());
        TripRepository::insert(&*store, TripBuilder::new().build())
            .await
            .unwrap();
        store
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_the_expense(
        #[future] store_with_trip: Arc<InMemoryTravelStore>,
    ) {
        let store = store_with_trip.await;
        let handler = RecordExpenseHandler::new(store.clone());
        let expense = handler
            .handle(RecordExpenseBuilder::new().build())
            .await
            .expect("handle failed");
        assert_eq!(
            ExpenseRepository::get(&*store, &expense.expense_id)
                .await
                .unwrap(),
            Some(expense)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_expense_for_an_unknown_trip() {
        let handler = RecordExpenseHandler::new(Arc::new(InMemoryTravelStore::new()));
        let result = handler.handle(RecordExpenseBuilder::new().build()).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::Domain(DecideError::UnknownTrip("trip-fixed-0001".into()).to_string())
                .to_string()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_unknown_payment_type(
        #[future] store_with_trip: Arc<InMemoryTravelStore>,
    ) {
        let handler = RecordExpenseHandler::new(store_with_trip.await);
        let result = handler
            .handle(RecordExpenseBuilder::new().payment_type_id("pt-bitcoin").build())
            .await;
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline() {
        let mut store = InMemoryTravelStore::new();
        store.toggle_offline();
        let handler = RecordExpenseHandler::new(Arc::new(store));
        let result = handler.handle(RecordExpenseBuilder::new().build()).await;
        assert!(matches!(result, Err(ApplicationError::Store(_))));
    }
}
