use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::inbound::actor::AdminActor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(expense_id): Path<String>,
) -> impl IntoResponse {
    match state.delete_expense.handle(&expense_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
