use std::sync::Arc;

use crate::modules::travel::adapters::outbound::in_memory_store::InMemoryTravelStore;
use crate::modules::travel::core::fuel::FuelPrice;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    make_test_state_with_store().0
}

/// State plus a handle on its store, for arranging rows before a request.
pub fn make_test_state_with_store() -> (AppState, Arc<InMemoryTravelStore>) {
    let store = Arc::new(InMemoryTravelStore::new());
    (AppState::new(store.clone(), FuelPrice::default()), store)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryTravelStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), FuelPrice::default())
}
