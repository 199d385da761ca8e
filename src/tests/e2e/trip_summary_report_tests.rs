use crate::modules::reports::use_cases::get_overall_summary::handler::GetOverallSummaryHandler;
use crate::modules::reports::use_cases::get_trip_summary::handler::GetTripSummaryHandler;
use crate::modules::travel::adapters::outbound::in_memory_store::InMemoryTravelStore;
use crate::modules::travel::core::fuel::FuelPrice;
use crate::modules::travel::use_cases::create_trip::handler::CreateTripHandler;
use crate::modules::travel::use_cases::delete_trip::handler::DeleteTripHandler;
use crate::modules::travel::use_cases::manage_catalog::handler::CatalogHandler;
use crate::modules::travel::use_cases::record_expense::handler::RecordExpenseHandler;
use crate::shared::application::errors::ApplicationError;
use crate::tests::fixtures::commands::{CreateTripBuilder, RecordExpenseBuilder};
use rust_decimal_macros::dec;
use std::sync::Arc;

#[tokio::test]
async fn summarizes_a_trip_from_creation_to_deletion() {
    let store = Arc::new(InMemoryTravelStore::new());
    let create = CreateTripHandler::new(store.clone(), FuelPrice::default());
    let record = RecordExpenseHandler::new(store.clone());
    let trip_summary = GetTripSummaryHandler::new(store.clone());
    let overall_summary = GetOverallSummaryHandler::new(store.clone());

    let trip = create
        .handle(
            CreateTripBuilder::new()
                .trip_id("t-1")
                .initial_cash(dec!(500.00))
                .distance(Some(dec!(300)))
                .fuel_consumption(Some(dec!(10)))
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(trip.estimated_fuel_cost, Some(dec!(165.00)));

    let expenses = [
        ("e-1", "cat-food", "pt-cash", dec!(120.00)),
        ("e-2", "cat-fuel", "pt-pix", dec!(80.00)),
    ];
    for (expense_id, category_id, payment_type_id, amount) in expenses {
        record
            .handle(
                RecordExpenseBuilder::new()
                    .expense_id(expense_id)
                    .trip_id("t-1")
                    .category_id(category_id)
                    .payment_type_id(payment_type_id)
                    .amount(amount)
                    .build(),
            )
            .await
            .unwrap();
    }

    let summary = trip_summary.handle("t-1").await.unwrap();
    assert_eq!(summary.total_expenses, dec!(200.00));
    assert_eq!(summary.cash_expenses, dec!(120.00));
    assert_eq!(summary.remaining_cash, dec!(380.00));
    assert_eq!(summary.expenses_count, 2);
    assert_eq!(summary.expenses_by_category["Alimentação"], dec!(120.00));
    assert_eq!(summary.expenses_by_category["Combustível"], dec!(80.00));
    assert_eq!(summary.expenses_by_payment_type["Dinheiro"], dec!(120.00));
    assert_eq!(summary.expenses_by_payment_type["PIX"], dec!(80.00));

    let overall = overall_summary.handle().await.unwrap();
    assert_eq!(overall.total_trips, 1);
    assert_eq!(overall.average_expense_per_trip, dec!(200.00));

    // Referenced catalog rows cannot go while the trip's expenses exist.
    let catalog = CatalogHandler::new(store.clone());
    assert!(matches!(
        catalog.delete_payment_type("pt-pix").await,
        Err(ApplicationError::InUse { count: 1, .. })
    ));

    let removed = DeleteTripHandler::new(store.clone())
        .handle("t-1")
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert!(matches!(
        trip_summary.handle("t-1").await,
        Err(ApplicationError::NotFound { .. })
    ));
    catalog.delete_payment_type("pt-pix").await.unwrap();

    let overall = overall_summary.handle().await.unwrap();
    assert_eq!(overall.total_trips, 0);
    assert_eq!(overall.total_expenses, dec!(0));
    assert_eq!(overall.average_expense_per_trip, dec!(0));
}
