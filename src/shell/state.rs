use std::sync::Arc;

use crate::modules::reports::use_cases::get_overall_summary::handler::GetOverallSummaryHandler;
use crate::modules::reports::use_cases::get_trip_summary::handler::GetTripSummaryHandler;
use crate::modules::travel::adapters::outbound::in_memory_store::InMemoryTravelStore;
use crate::modules::travel::core::fuel::FuelPrice;
use crate::modules::travel::core::ports::TripRepository;
use crate::modules::travel::use_cases::create_trip::handler::CreateTripHandler;
use crate::modules::travel::use_cases::delete_expense::handler::DeleteExpenseHandler;
use crate::modules::travel::use_cases::delete_trip::handler::DeleteTripHandler;
use crate::modules::travel::use_cases::list_expenses::handler::ListExpensesHandler;
use crate::modules::travel::use_cases::manage_catalog::handler::CatalogHandler;
use crate::modules::travel::use_cases::record_expense::handler::RecordExpenseHandler;
use crate::modules::travel::use_cases::update_expense::handler::UpdateExpenseHandler;
use crate::modules::travel::use_cases::update_trip::handler::UpdateTripHandler;

type Store = InMemoryTravelStore;

#[derive(Clone)]
pub struct AppState {
    pub trips: Arc<dyn TripRepository + Send + Sync>,
    pub create_trip: Arc<CreateTripHandler<Store>>,
    pub update_trip: Arc<UpdateTripHandler<Store>>,
    pub delete_trip: Arc<DeleteTripHandler<Store>>,
    pub record_expense: Arc<RecordExpenseHandler<Store>>,
    pub update_expense: Arc<UpdateExpenseHandler<Store>>,
    pub delete_expense: Arc<DeleteExpenseHandler<Store>>,
    pub list_expenses: Arc<ListExpensesHandler<Store>>,
    pub catalog: Arc<CatalogHandler<Store>>,
    pub trip_summary: Arc<GetTripSummaryHandler<Store>>,
    pub overall_summary: Arc<GetOverallSummaryHandler<Store>>,
}

impl AppState {
    /// Wires every use case handler onto one shared store.
    pub fn new(store: Arc<Store>, fuel_price: FuelPrice) -> Self {
        Self {
            trips: store.clone(),
            create_trip: Arc::new(CreateTripHandler::new(store.clone(), fuel_price)),
            update_trip: Arc::new(UpdateTripHandler::new(store.clone(), fuel_price)),
            delete_trip: Arc::new(DeleteTripHandler::new(store.clone())),
            record_expense: Arc::new(RecordExpenseHandler::new(store.clone())),
            update_expense: Arc::new(UpdateExpenseHandler::new(store.clone())),
            delete_expense: Arc::new(DeleteExpenseHandler::new(store.clone())),
            list_expenses: Arc::new(ListExpensesHandler::new(store.clone())),
            catalog: Arc::new(CatalogHandler::new(store.clone())),
            trip_summary: Arc::new(GetTripSummaryHandler::new(store.clone())),
            overall_summary: Arc::new(GetOverallSummaryHandler::new(store)),
        }
    }
}
