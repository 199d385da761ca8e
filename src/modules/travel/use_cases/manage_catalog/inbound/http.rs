use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::travel::use_cases::manage_catalog::command::{
    CategoryInput, PaymentTypeInput,
};
use crate::shared::inbound::actor::{Actor, AdminActor};
use crate::shared::inbound::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CategoryBody {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl From<CategoryBody> for CategoryInput {
    fn from(body: CategoryBody) -> Self {
        Self {
            name: body.name,
            icon: body.icon,
        }
    }
}

#[derive(Deserialize)]
pub struct PaymentTypeBody {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_cash: bool,
}

impl From<PaymentTypeBody> for PaymentTypeInput {
    fn from(body: PaymentTypeBody) -> Self {
        Self {
            name: body.name,
            icon: body.icon,
            is_cash: body.is_cash,
        }
    }
}

pub async fn list_categories(State(state): State<AppState>, _actor: Actor) -> impl IntoResponse {
    match state.catalog.list_categories().await {
        Ok(categories) => Json(categories).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    _admin: AdminActor,
    body: Result<Json<CategoryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.catalog.create_category(body.into()).await {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_category(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(category_id): Path<String>,
    body: Result<Json<CategoryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.catalog.update_category(&category_id, body.into()).await {
        Ok(category) => Json(category).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_category(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(category_id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.delete_category(&category_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_payment_types(State(state): State<AppState>, _actor: Actor) -> impl IntoResponse {
    match state.catalog.list_payment_types().await {
        Ok(payment_types) => Json(payment_types).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_payment_type(
    State(state): State<AppState>,
    _admin: AdminActor,
    body: Result<Json<PaymentTypeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.catalog.create_payment_type(body.into()).await {
        Ok(payment_type) => (StatusCode::CREATED, Json(payment_type)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_payment_type(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(payment_type_id): Path<String>,
    body: Result<Json<PaymentTypeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state
        .catalog
        .update_payment_type(&payment_type_id, body.into())
        .await
    {
        Ok(payment_type) => Json(payment_type).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_payment_type(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(payment_type_id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.delete_payment_type(&payment_type_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
