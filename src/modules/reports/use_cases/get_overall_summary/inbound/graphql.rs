use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use rust_decimal::Decimal;

use crate::modules::reports::core::overall_summary::OverallSummary;
use crate::shell::graphql::require_actor;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlOverallSummary {
    pub total_trips: u64,
    pub active_trips: u64,
    pub completed_trips: u64,
    pub total_expenses: Decimal,
    pub average_expense_per_trip: Decimal,
}

impl From<OverallSummary> for GqlOverallSummary {
    fn from(s: OverallSummary) -> Self {
        Self {
            total_trips: s.total_trips as u64,
            active_trips: s.active_trips as u64,
            completed_trips: s.completed_trips as u64,
            total_expenses: s.total_expenses,
            average_expense_per_trip: s.average_expense_per_trip,
        }
    }
}

#[derive(Default)]
pub struct OverallSummaryQuery;

#[Object]
impl OverallSummaryQuery {
    async fn overall_summary(&self, context: &Context<'_>) -> GqlResult<GqlOverallSummary> {
        require_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .overall_summary
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(summary.into())
    }
}
