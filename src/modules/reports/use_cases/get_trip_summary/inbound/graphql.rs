use std::collections::BTreeMap;

use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use rust_decimal::Decimal;

use crate::modules::reports::core::trip_summary::TripSummary;
use crate::modules::travel::use_cases::list_trips::inbound::graphql::GqlTrip;
use crate::shared::application::errors::ApplicationError;
use crate::shell::graphql::require_actor;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAmountByKey {
    pub key: String,
    pub amount: Decimal,
}

fn buckets(map: BTreeMap<String, Decimal>) -> Vec<GqlAmountByKey> {
    map.into_iter()
        .map(|(key, amount)| GqlAmountByKey { key, amount })
        .collect()
}

#[derive(SimpleObject, Clone)]
pub struct GqlTripSummary {
    pub trip: GqlTrip,
    pub total_expenses: Decimal,
    pub cash_expenses: Decimal,
    pub remaining_cash: Decimal,
    pub expenses_by_category: Vec<GqlAmountByKey>,
    pub expenses_by_payment_type: Vec<GqlAmountByKey>,
    pub expenses_count: u64,
}

impl From<TripSummary> for GqlTripSummary {
    fn from(s: TripSummary) -> Self {
        Self {
            trip: s.trip.into(),
            total_expenses: s.total_expenses,
            cash_expenses: s.cash_expenses,
            remaining_cash: s.remaining_cash,
            expenses_by_category: buckets(s.expenses_by_category),
            expenses_by_payment_type: buckets(s.expenses_by_payment_type),
            expenses_count: s.expenses_count as u64,
        }
    }
}

#[derive(Default)]
pub struct TripSummaryQuery;

#[Object]
impl TripSummaryQuery {
    /// `null` when the trip does not exist.
    async fn trip_summary(
        &self,
        context: &Context<'_>,
        trip_id: String,
    ) -> GqlResult<Option<GqlTripSummary>> {
        require_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        match state.trip_summary.handle(&trip_id).await {
            Ok(summary) => Ok(Some(summary.into())),
            Err(ApplicationError::NotFound { .. }) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
