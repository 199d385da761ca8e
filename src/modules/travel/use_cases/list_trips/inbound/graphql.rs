use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::travel::core::trip::Trip;
use crate::shell::graphql::require_actor;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTrip {
    pub trip_id: String,
    pub main_destination: String,
    pub main_reason: String,
    pub other_destinations: Option<String>,
    pub companions: Option<String>,
    pub distance: Option<Decimal>,
    pub fuel_consumption: Option<Decimal>,
    pub estimated_fuel_cost: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: Decimal,
    pub status: String,
    pub created_at: i64,
    pub created_by: String,
}

impl From<Trip> for GqlTrip {
    fn from(t: Trip) -> Self {
        Self {
            trip_id: t.trip_id,
            main_destination: t.main_destination,
            main_reason: t.main_reason,
            other_destinations: t.other_destinations,
            companions: t.companions,
            distance: t.distance,
            fuel_consumption: t.fuel_consumption,
            estimated_fuel_cost: t.estimated_fuel_cost,
            start_date: t.start_date,
            end_date: t.end_date,
            initial_cash: t.initial_cash,
            status: t.status.as_str().to_string(),
            created_at: t.created_at,
            created_by: t.created_by,
        }
    }
}

#[derive(Default)]
pub struct TripsQuery;

#[Object]
impl TripsQuery {
    async fn trips(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTrip>> {
        require_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let trips = state.trips.list().await?;
        Ok(trips.into_iter().map(Into::into).collect())
    }
}
