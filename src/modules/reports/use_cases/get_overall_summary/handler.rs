use std::sync::Arc;

use crate::modules::reports::core::overall_summary::{OverallSummary, summarize};
use crate::modules::travel::core::ports::{ExpenseRepository, TripRepository};
use crate::shared::application::errors::ApplicationError;

pub struct GetOverallSummaryHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetOverallSummaryHandler<TStore>
where
    TStore: TripRepository + ExpenseRepository + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<OverallSummary, ApplicationError> {
        let trips = TripRepository::list(&*self.store).await?;
        let expenses = ExpenseRepository::list(&*self.store).await?;
        summarize(&trips, &expenses).map_err(|e| {
            tracing::error!(error = %e, "overall summary out of range");
            ApplicationError::Domain(e.to_string())
        })
    }
}
