use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::inbound::actor::Actor;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, _actor: Actor) -> impl IntoResponse {
    match state.trips.list().await {
        Ok(trips) => Json(trips).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing trips failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_one(
    State(state): State<AppState>,
    _actor: Actor,
    Path(trip_id): Path<String>,
) -> impl IntoResponse {
    match state.trips.get(&trip_id).await {
        Ok(Some(trip)) => Json(trip).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!(error = %e, %trip_id, "loading trip failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
