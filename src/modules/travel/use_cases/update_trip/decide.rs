// Pure decision function for editing a trip.
//
// - Same validation as creation.
// - The fuel estimate is derived again from the new distance and consumption.
// - Authorship and creation time are never edited.

use crate::modules::travel::core::fuel::{FuelPrice, estimate_fuel_cost};
use crate::modules::travel::core::trip::Trip;
use crate::modules::travel::use_cases::create_trip::decide::{DecideError, validate_details};
use crate::modules::travel::use_cases::update_trip::command::UpdateTrip;

pub fn decide_update_trip(
    current: &Trip,
    command: UpdateTrip,
    fuel_price: FuelPrice,
) -> Result<Trip, DecideError> {
    validate_details(&command.details)?;
    let details = command.details;
    Ok(Trip {
        trip_id: current.trip_id.clone(),
        estimated_fuel_cost: estimate_fuel_cost(
            details.distance,
            details.fuel_consumption,
            fuel_price,
        ),
        main_destination: details.main_destination,
        main_reason: details.main_reason,
        other_destinations: details.other_destinations,
        companions: details.companions,
        distance: details.distance,
        fuel_consumption: details.fuel_consumption,
        start_date: details.start_date,
        end_date: details.end_date,
        initial_cash: details.initial_cash,
        status: command.status.unwrap_or(current.status),
        created_at: current.created_at,
        created_by: current.created_by.clone(),
    })
}
