use crate::modules::travel::core::trip::TripStatus;
use crate::modules::travel::use_cases::create_trip::command::TripDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTrip {
    pub trip_id: String,
    pub details: TripDetails,
    /// `None` keeps the trip's current status.
    pub status: Option<TripStatus>,
}
