// Financial summary of a single trip.
//
// - Pure: the caller hands in the trip, the expenses recorded against it and
//   a catalog snapshot. Nothing is fetched here.
// - Cash is identified by the payment type's `is_cash` flag, never by name.
// - Buckets are keyed by display name.
// - An expense whose category or payment type does not resolve is left out of
//   every figure, so that both groupings always add up to the total.
// - Totals outside the `Decimal` range fail with `ReportError::Overflow`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::reports::core::catalog_snapshot::CatalogSnapshot;
use crate::modules::reports::core::errors::ReportError;
use crate::modules::travel::core::catalog::{Category, PaymentType};
use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::core::trip::Trip;
use crate::shared::core::aggregation::{group_amounts, subtract_amount, sum_amounts};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub trip: Trip,
    pub total_expenses: Decimal,
    pub cash_expenses: Decimal,
    pub remaining_cash: Decimal,
    pub expenses_by_category: BTreeMap<String, Decimal>,
    pub expenses_by_payment_type: BTreeMap<String, Decimal>,
    pub expenses_count: usize,
}

struct Resolved<'a> {
    amount: Decimal,
    category: &'a Category,
    payment_type: &'a PaymentType,
}

fn resolve<'a>(expense: &Expense, catalog: &'a CatalogSnapshot) -> Option<Resolved<'a>> {
    let Some(category) = catalog.category(&expense.category_id) else {
        tracing::warn!(
            expense_id = %expense.expense_id,
            category_id = %expense.category_id,
            "expense skipped: category no longer exists"
        );
        return None;
    };
    let Some(payment_type) = catalog.payment_type(&expense.payment_type_id) else {
        tracing::warn!(
            expense_id = %expense.expense_id,
            payment_type_id = %expense.payment_type_id,
            "expense skipped: payment type no longer exists"
        );
        return None;
    };
    Some(Resolved {
        amount: expense.amount,
        category,
        payment_type,
    })
}

pub fn summarize(
    trip: Option<Trip>,
    expenses: &[Expense],
    catalog: &CatalogSnapshot,
) -> Result<TripSummary, ReportError> {
    let trip = trip.ok_or(ReportError::TripNotFound)?;

    let resolved: Vec<Resolved<'_>> = expenses.iter().filter_map(|e| resolve(e, catalog)).collect();

    let total_expenses = sum_amounts(resolved.iter().map(|r| r.amount))?;
    let cash_expenses = sum_amounts(
        resolved
            .iter()
            .filter(|r| r.payment_type.is_cash)
            .map(|r| r.amount),
    )?;

    Ok(TripSummary {
        remaining_cash: subtract_amount(trip.initial_cash, cash_expenses)?,
        total_expenses,
        cash_expenses,
        expenses_by_category: group_amounts(
            resolved.iter().map(|r| (r.category.name.as_str(), r.amount)),
        )?,
        expenses_by_payment_type: group_amounts(
            resolved
                .iter()
                .map(|r| (r.payment_type.name.as_str(), r.amount)),
        )?,
        expenses_count: resolved.len(),
        trip,
    })
}
