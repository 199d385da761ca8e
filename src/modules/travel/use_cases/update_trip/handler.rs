use std::sync::Arc;

use crate::modules::travel::core::fuel::FuelPrice;
use crate::modules::travel::core::ports::TripRepository;
use crate::modules::travel::core::trip::Trip;
use crate::modules::travel::use_cases::update_trip::command::UpdateTrip;
use crate::modules::travel::use_cases::update_trip::decide::decide_update_trip;
use crate::shared::application::errors::ApplicationError;

pub struct UpdateTripHandler<TTrips>
where
    TTrips: TripRepository + 'static,
{
    trips: Arc<TTrips>,
    fuel_price: FuelPrice,
}

impl<TTrips> UpdateTripHandler<TTrips>
where
    TTrips: TripRepository + 'static,
{
    pub fn new(trips: Arc<TTrips>, fuel_price: FuelPrice) -> Self {
        Self { trips, fuel_price }
    }

    pub async fn handle(&self, command: UpdateTrip) -> Result<Trip, ApplicationError> {
        let current = self
            .trips
            .get(&command.trip_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("trip", command.trip_id.clone()))?;

        let trip = decide_update_trip(&current, command, self.fuel_price)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        self.trips.update(trip.clone()).await?;
        tracing::info!(
            trip_id = %trip.trip_id,
            status = trip.status.as_str(),
            estimated_fuel_cost = ?trip.estimated_fuel_cost,
            "trip updated"
        );
        Ok(trip)
    }
}
