use std::sync::Arc;

use crate::modules::travel::core::fuel::FuelPrice;
use crate::modules::travel::core::ports::TripRepository;
use crate::modules::travel::core::trip::Trip;
use crate::modules::travel::use_cases::create_trip::command::CreateTrip;
use crate::modules::travel::use_cases::create_trip::decide::decide_create_trip;
use crate::shared::application::errors::ApplicationError;

pub struct CreateTripHandler<TTrips>
where
    TTrips: TripRepository + 'static,
{
    trips: Arc<TTrips>,
    fuel_price: FuelPrice,
}

impl<TTrips> CreateTripHandler<TTrips>
where
    TTrips: TripRepository + 'static,
{
    pub fn new(trips: Arc<TTrips>, fuel_price: FuelPrice) -> Self {
        Self { trips, fuel_price }
    }

    pub async fn handle(&self, command: CreateTrip) -> Result<Trip, ApplicationError> {
        let trip = decide_create_trip(command, self.fuel_price)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        self.trips.insert(trip.clone()).await?;
        tracing::info!(
            trip_id = %trip.trip_id,
            estimated_fuel_cost = ?trip.estimated_fuel_cost,
            "trip created"
        );
        Ok(trip)
    }
}
