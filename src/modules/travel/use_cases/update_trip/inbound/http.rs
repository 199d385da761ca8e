use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::travel::core::trip::TripStatus;
use crate::modules::travel::use_cases::create_trip::command::TripDetails;
use crate::modules::travel::use_cases::update_trip::command::UpdateTrip;
use crate::shared::inbound::actor::AdminActor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTripBody {
    pub main_destination: String,
    pub main_reason: String,
    pub other_destinations: Option<String>,
    pub companions: Option<String>,
    pub distance: Option<Decimal>,
    pub fuel_consumption: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: Decimal,
    pub status: Option<TripStatus>,
}

pub async fn handle(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Path(trip_id): Path<String>,
    body: Result<Json<UpdateTripBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTrip {
        trip_id,
        details: TripDetails {
            main_destination: body.main_destination,
            main_reason: body.main_reason,
            other_destinations: body.other_destinations,
            companions: body.companions,
            distance: body.distance,
            fuel_consumption: body.fuel_consumption,
            start_date: body.start_date,
            end_date: body.end_date,
            initial_cash: body.initial_cash,
        },
        status: body.status,
    };

    tracing::debug!(user_id = %actor.user_id, trip_id = %command.trip_id, "updating trip");
    match state.update_trip.handle(command).await {
        Ok(trip) => Json(trip).into_response(),
        Err(e) => error_response(e),
    }
}
