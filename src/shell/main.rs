use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use travel_expenses::modules::travel::adapters::outbound::in_memory_store::InMemoryTravelStore;
use travel_expenses::shell::config::AppConfig;
use travel_expenses::shell::graphql::GRAPHQL_PATH;
use travel_expenses::shell::http::app;
use travel_expenses::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    // In-memory store for now
    let store = Arc::new(InMemoryTravelStore::new());
    let state = AppState::new(store, config.fuel_price);

    tracing::info!(
        fuel_price_per_liter = %config.fuel_price.per_liter(),
        "REST API: http://{}/api, GraphQL endpoint: http://{}{}",
        addr,
        addr,
        GRAPHQL_PATH
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
