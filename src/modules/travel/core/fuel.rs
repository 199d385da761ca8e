// Fuel cost estimation for a trip.
//
// The estimate is derived, never stored independently of its inputs: every
// trip create and update recomputes it from the latest distance and
// consumption pair.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuelPriceError {
    #[error("fuel price must be a decimal number, got {0:?}")]
    Unparseable(String),

    #[error("fuel price must not be negative, got {0}")]
    Negative(Decimal),
}

/// Average local price of one litre of fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelPrice(Decimal);

impl FuelPrice {
    pub fn new(per_liter: Decimal) -> Result<Self, FuelPriceError> {
        if per_liter < Decimal::ZERO {
            return Err(FuelPriceError::Negative(per_liter));
        }
        Ok(Self(per_liter))
    }

    pub fn per_liter(&self) -> Decimal {
        self.0
    }
}

impl Default for FuelPrice {
    fn default() -> Self {
        Self(Decimal::new(550, 2))
    }
}

impl FromStr for FuelPrice {
    type Err = FuelPriceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|_| FuelPriceError::Unparseable(raw.to_string()))?;
        Self::new(value)
    }
}

/// `distance / fuel_consumption * price`, or `None` when either input is
/// unknown. A zero consumption also yields `None` rather than dividing.
pub fn estimate_fuel_cost(
    distance: Option<Decimal>,
    fuel_consumption: Option<Decimal>,
    price: FuelPrice,
) -> Option<Decimal> {
    let (distance, fuel_consumption) = (distance?, fuel_consumption?);
    if fuel_consumption.is_zero() {
        return None;
    }
    distance
        .checked_div(fuel_consumption)?
        .checked_mul(price.per_liter())
}
