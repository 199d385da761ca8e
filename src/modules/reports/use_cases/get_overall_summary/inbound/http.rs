use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::inbound::actor::Actor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, _actor: Actor) -> impl IntoResponse {
    match state.overall_summary.handle().await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response(e),
    }
}
