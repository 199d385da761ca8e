use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::shared::application::errors::ApplicationError;

/// Maps an application error onto the HTTP status the API promises for it.
pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Domain(reason) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": reason })),
        )
            .into_response(),
        ApplicationError::InUse { entity, id, count } => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": format!("{entity} {id} is used by {count} expense(s)"),
                "blocking_expenses": count,
            })),
        )
            .into_response(),
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
