use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::travel::use_cases::record_expense::inbound::http::ExpenseBody;
use crate::shared::inbound::actor::AdminActor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(expense_id): Path<String>,
    body: Result<Json<ExpenseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.update_expense.handle(&expense_id, body.into()).await {
        Ok(expense) => Json(expense).into_response(),
        Err(e) => error_response(e),
    }
}
