use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::inbound::actor::Actor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListExpensesParams {
    pub trip_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    _actor: Actor,
    Query(params): Query<ListExpensesParams>,
) -> impl IntoResponse {
    match state.list_expenses.handle(params.trip_id.as_deref()).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => error_response(e),
    }
}
