use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::travel::use_cases::create_trip::command::{CreateTrip, TripDetails};
use crate::modules::travel::use_cases::list_trips::inbound::graphql::GqlTrip;
use crate::shell::graphql::require_admin;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CreateTripInput {
    pub main_destination: String,
    pub main_reason: String,
    pub other_destinations: Option<String>,
    pub companions: Option<String>,
    pub distance: Option<Decimal>,
    pub fuel_consumption: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: Decimal,
}

#[derive(Default)]
pub struct CreateTripMutation;

#[Object]
impl CreateTripMutation {
    async fn create_trip(
        &self,
        context: &Context<'_>,
        input: CreateTripInput,
    ) -> GqlResult<GqlTrip> {
        let actor = require_admin(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = CreateTrip {
            trip_id: Uuid::now_v7().to_string(),
            details: TripDetails {
                main_destination: input.main_destination,
                main_reason: input.main_reason,
                other_destinations: input.other_destinations,
                companions: input.companions,
                distance: input.distance,
                fuel_consumption: input.fuel_consumption,
                start_date: input.start_date,
                end_date: input.end_date,
                initial_cash: input.initial_cash,
            },
            created_at: Utc::now().timestamp_millis(),
            created_by: actor.user_id,
        };

        let trip = state
            .create_trip
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(trip.into())
    }
}
