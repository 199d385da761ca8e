use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::travel::use_cases::record_expense::command::{ExpenseDetails, RecordExpense};
use crate::shared::inbound::actor::Actor;
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExpenseBody {
    pub trip_id: String,
    pub category_id: String,
    pub payment_type_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub receipt: Option<String>,
}

impl From<ExpenseBody> for ExpenseDetails {
    fn from(body: ExpenseBody) -> Self {
        Self {
            trip_id: body.trip_id,
            category_id: body.category_id,
            payment_type_id: body.payment_type_id,
            amount: body.amount,
            description: body.description,
            date: body.date,
            receipt: body.receipt,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<ExpenseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordExpense {
        expense_id: Uuid::now_v7().to_string(),
        details: body.into(),
        created_at: Utc::now().timestamp_millis(),
        created_by: actor.user_id,
    };

    match state.record_expense.handle(command).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => error_response(e),
    }
}
