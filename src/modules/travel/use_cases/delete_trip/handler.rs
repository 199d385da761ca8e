use std::sync::Arc;

use crate::modules::travel::core::ports::{StoreError, TripRepository};
use crate::shared::application::errors::ApplicationError;

pub struct DeleteTripHandler<TTrips>
where
    TTrips: TripRepository + 'static,
{
    trips: Arc<TTrips>,
}

impl<TTrips> DeleteTripHandler<TTrips>
where
    TTrips: TripRepository + 'static,
{
    pub fn new(trips: Arc<TTrips>) -> Self {
        Self { trips }
    }

    /// Deletes the trip together with its expenses. Returns how many
    /// expenses were removed.
    pub async fn handle(&self, trip_id: &str) -> Result<usize, ApplicationError> {
        match self.trips.delete_with_expenses(trip_id).await {
            Ok(removed) => {
                tracing::info!(%trip_id, removed_expenses = removed, "trip deleted");
                Ok(removed)
            }
            Err(StoreError::Missing { entity, id }) => Err(ApplicationError::not_found(entity, id)),
            Err(e) => Err(e.into()),
        }
    }
}
