use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, MergedObject, Result as GqlResult, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::reports::use_cases::get_overall_summary::inbound::graphql::OverallSummaryQuery;
use crate::modules::reports::use_cases::get_trip_summary::inbound::graphql::TripSummaryQuery;
use crate::modules::travel::use_cases::create_trip::inbound::graphql::CreateTripMutation;
use crate::modules::travel::use_cases::list_trips::inbound::graphql::TripsQuery;
use crate::modules::travel::use_cases::record_expense::inbound::graphql::RecordExpenseMutation;
use crate::shared::inbound::actor::Actor;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(TripsQuery, TripSummaryQuery, OverallSummaryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateTripMutation, RecordExpenseMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// The caller of the current operation, or an error when the request carried
/// no identity.
pub fn require_actor(context: &Context<'_>) -> GqlResult<Actor> {
    context
        .data_opt::<Actor>()
        .cloned()
        .ok_or_else(|| async_graphql::Error::new("unauthenticated"))
}

pub fn require_admin(context: &Context<'_>) -> GqlResult<Actor> {
    let actor = require_actor(context)?;
    if !actor.is_admin() {
        tracing::warn!(user_id = %actor.user_id, "admin operation refused");
        return Err(async_graphql::Error::new("forbidden"));
    }
    Ok(actor)
}

/// Executes a GraphQL request. Identity is optional at this level; each
/// field decides what it requires.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    actor: Option<Actor>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(actor) = actor {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
