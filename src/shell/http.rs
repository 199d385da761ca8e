use axum::{
    Extension, Json, Router,
    routing::{get, put},
};
use chrono::Utc;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::reports::use_cases::get_overall_summary::inbound::http as overall_summary_http;
use crate::modules::reports::use_cases::get_trip_summary::inbound::http as trip_summary_http;
use crate::modules::travel::use_cases::create_trip::inbound::http as create_trip_http;
use crate::modules::travel::use_cases::delete_expense::inbound::http as delete_expense_http;
use crate::modules::travel::use_cases::delete_trip::inbound::http as delete_trip_http;
use crate::modules::travel::use_cases::list_expenses::inbound::http as list_expenses_http;
use crate::modules::travel::use_cases::list_trips::inbound::http as list_trips_http;
use crate::modules::travel::use_cases::manage_catalog::inbound::http as catalog_http;
use crate::modules::travel::use_cases::record_expense::inbound::http as record_expense_http;
use crate::modules::travel::use_cases::update_expense::inbound::http as update_expense_http;
use crate::modules::travel::use_cases::update_trip::inbound::http as update_trip_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

/// Build version of the running service. Open to anonymous callers.
pub async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/version", get(version))
        .route(
            "/api/trips",
            get(list_trips_http::handle).post(create_trip_http::handle),
        )
        .route(
            "/api/trips/{id}",
            get(list_trips_http::handle_one)
                .put(update_trip_http::handle)
                .delete(delete_trip_http::handle),
        )
        .route(
            "/api/expenses",
            get(list_expenses_http::handle).post(record_expense_http::handle),
        )
        .route(
            "/api/expenses/{id}",
            put(update_expense_http::handle).delete(delete_expense_http::handle),
        )
        .route(
            "/api/categories",
            get(catalog_http::list_categories).post(catalog_http::create_category),
        )
        .route(
            "/api/categories/{id}",
            put(catalog_http::update_category).delete(catalog_http::delete_category),
        )
        .route(
            "/api/payment-types",
            get(catalog_http::list_payment_types).post(catalog_http::create_payment_type),
        )
        .route(
            "/api/payment-types/{id}",
            put(catalog_http::update_payment_type).delete(catalog_http::delete_payment_type),
        )
        .route("/api/reports/summary", get(overall_summary_http::handle))
        .route("/api/reports/trip/{id}", get(trip_summary_http::handle))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with tracing and CORS.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
