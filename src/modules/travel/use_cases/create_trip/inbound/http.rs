use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::travel::use_cases::create_trip::command::{CreateTrip, TripDetails};
use crate::shared::inbound::actor::AdminActor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTripBody {
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

impl From<CreateTripBody> for TripDetails {
    fn from(body: CreateTripBody) -> Self {
        Self {
            main_destination: body.main_destination,
            main_reason: body.main_reason,
            other_destinations: body.other_destinations,
            companions: body.companions,
            distance: body.distance,
            fuel_consumption: body.fuel_consumption,
            start_date: body.start_date,
            end_date: body.end_date,
            initial_cash: body.initial_cash,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    body: Result<Json<CreateTripBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateTrip {
        trip_id: Uuid::now_v7().to_string(),
        details: body.into(),
        created_at: Utc::now().timestamp_millis(),
        created_by: actor.user_id,
    };

    match state.create_trip.handle(command).await {
        Ok(trip) => (StatusCode::CREATED, Json(trip)).into_response(),
        Err(e) => error_response(e),
    }
}
