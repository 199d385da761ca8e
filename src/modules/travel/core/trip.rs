use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planned,
    Active,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub trip_id: String,
    pub main_destination: String,
    pub main_reason: String,
    pub other_destinations: Option<String>,
    pub companions: Option<String>,
    /// Kilometres.
    pub distance: Option<Decimal>,
    /// Kilometres per litre.
    pub fuel_consumption: Option<Decimal>,
    pub estimated_fuel_cost: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: Decimal,
    pub status: TripStatus,
    pub created_at: i64,
    pub created_by: String,
}
