use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Every field an admin provides when creating or editing a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetails {
    pub main_destination: String,
    pub main_reason: String,
    pub other_destinations: Option<String>,
    pub companions: Option<String>,
    pub distance: Option<Decimal>,
    pub fuel_consumption: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTrip {
    pub trip_id: String,
    pub details: TripDetails,
    pub created_at: i64,
    pub created_by: String,
}
