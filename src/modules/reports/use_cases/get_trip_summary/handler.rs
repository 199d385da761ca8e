use std::sync::Arc;

use crate::modules::reports::core::catalog_snapshot::CatalogSnapshot;
use crate::modules::reports::core::errors::ReportError;
use crate::modules::reports::core::trip_summary::{TripSummary, summarize};
use crate::modules::travel::core::ports::{CatalogRepository, ExpenseRepository, TripRepository};
use crate::shared::application::errors::ApplicationError;

/// Loads one trip with its expenses and the catalog, then summarizes.
pub struct GetTripSummaryHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetTripSummaryHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + CatalogRepository + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, trip_id: &str) -> Result<TripSummary, ApplicationError> {
        let trip = TripRepository::get(&*self.store, trip_id).await?;
        let expenses = match &trip {
            Some(_) => self.store.list_by_trip(trip_id).await?,
            None => Vec::new(),
        };
        let catalog = CatalogSnapshot::new(
            self.store.list_categories().await?,
            self.store.list_payment_types().await?,
        );

        summarize(trip, &expenses, &catalog).map_err(|e| match e {
            ReportError::TripNotFound => ApplicationError::not_found("trip", trip_id),
            ReportError::Overflow(_) => {
                tracing::error!(%trip_id, error = %e, "trip summary out of range");
                ApplicationError::Domain(e.to_string())
            }
        })
    }
}
