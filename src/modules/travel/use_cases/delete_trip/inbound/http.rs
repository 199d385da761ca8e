use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::inbound::actor::AdminActor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteTripResponse {
    pub trip_id: String,
    pub removed_expenses: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(trip_id): Path<String>,
) -> impl IntoResponse {
    match state.delete_trip.handle(&trip_id).await {
        Ok(removed_expenses) => Json(DeleteTripResponse {
            trip_id,
            removed_expenses,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
