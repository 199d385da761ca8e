// Pure decision function for trip creation.
//
// - Validates the details an admin typed in. Money and distance are capped
//   at `MAX_AMOUNT` so report totals stay representable.
// - Derives the fuel estimate from the configured price.
// - Never performs input or output.

use rust_decimal::Decimal;

use crate::modules::travel::core::fuel::{FuelPrice, estimate_fuel_cost};
use crate::modules::travel::core::trip::{Trip, TripStatus};
use crate::modules::travel::use_cases::create_trip::command::{CreateTrip, TripDetails};
use crate::shared::core::aggregation::MAX_AMOUNT;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("main destination is required")]
    MissingDestination,

    #[error("main reason is required")]
    MissingReason,

    #[error("end date must not be before start date")]
    InvalidInterval,

    #[error("distance must not be negative")]
    NegativeDistance,

    #[error("fuel consumption must be greater than zero")]
    NonPositiveFuelConsumption,

    #[error("distance must not exceed 1000000000")]
    DistanceTooLarge,

    #[error("initial cash must be between -1000000000 and 1000000000")]
    InitialCashOutOfRange,
}

pub fn validate_details(details: &TripDetails) -> Result<(), DecideError> {
    if details.main_destination.trim().is_empty() {
        return Err(DecideError::MissingDestination);
    }
    if details.main_reason.trim().is_empty() {
        return Err(DecideError::MissingReason);
    }
    if details.end_date < details.start_date {
        return Err(DecideError::InvalidInterval);
    }
    if details.distance.is_some_and(|d| d < Decimal::ZERO) {
        return Err(DecideError::NegativeDistance);
    }
    if details.distance.is_some_and(|d| d > MAX_AMOUNT) {
        return Err(DecideError::DistanceTooLarge);
    }
    if details.fuel_consumption.is_some_and(|c| c <= Decimal::ZERO) {
        return Err(DecideError::NonPositiveFuelConsumption);
    }
    if details.initial_cash.abs() > MAX_AMOUNT {
        return Err(DecideError::InitialCashOutOfRange);
    }
    Ok(())
}

pub fn decide_create_trip(command: CreateTrip, fuel_price: FuelPrice) -> Result<Trip, DecideError> {
    validate_details(&command.details)?;
    let details = command.details;
    Ok(Trip {
        trip_id: command.trip_id,
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
        status: TripStatus::Planned,
        created_at: command.created_at,
        created_by: command.created_by,
    })
}
