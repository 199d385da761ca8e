use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::inbound::actor::Actor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _actor: Actor,
    Path(trip_id): Path<String>,
) -> impl IntoResponse {
    match state.trip_summary.handle(&trip_id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response(e),
    }
}
