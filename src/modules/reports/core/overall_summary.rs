// Totals across every trip.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::reports::core::errors::ReportError;
use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::core::trip::{Trip, TripStatus};
use crate::shared::core::aggregation::{average_or_zero, sum_amounts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    pub total_trips: usize,
    pub active_trips: usize,
    pub completed_trips: usize,
    pub total_expenses: Decimal,
    pub average_expense_per_trip: Decimal,
}

/// Expenses whose trip is not among `trips` are left out of the totals.
pub fn summarize(trips: &[Trip], expenses: &[Expense]) -> Result<OverallSummary, ReportError> {
    let known: HashSet<&str> = trips.iter().map(|t| t.trip_id.as_str()).collect();
    let count_with = |status: TripStatus| trips.iter().filter(|t| t.status == status).count();

    let total_expenses = sum_amounts(
        expenses
            .iter()
            .filter(|e| {
                let kept = known.contains(e.trip_id.as_str());
                if !kept {
                    tracing::warn!(
                        expense_id = %e.expense_id,
                        trip_id = %e.trip_id,
                        "expense skipped: trip no longer exists"
                    );
                }
                kept
            })
            .map(|e| e.amount),
    )?;

    Ok(OverallSummary {
        total_trips: trips.len(),
        active_trips: count_with(TripStatus::Active),
        completed_trips: count_with(TripStatus::Completed),
        average_expense_per_trip: average_or_zero(total_expenses, trips.len() as u64),
        total_expenses,
    })
}
