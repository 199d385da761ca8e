use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::travel::core::expense::Expense;

/// An expense joined with the display names of what it points at.
/// A name is `None` when the referenced row no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseView {
    pub expense_id: String,
    pub trip_id: String,
    pub trip_destination: Option<String>,
    pub category_id: String,
    pub category_name: Option<String>,
    pub payment_type_id: String,
    pub payment_type_name: Option<String>,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub receipt: Option<String>,
    pub created_at: i64,
    pub created_by: String,
}

impl ExpenseView {
    pub fn from_expense(
        expense: Expense,
        trip_destination: Option<String>,
        category_name: Option<String>,
        payment_type_name: Option<String>,
    ) -> Self {
        Self {
            expense_id: expense.expense_id,
            trip_id: expense.trip_id,
            trip_destination,
            category_id: expense.category_id,
            category_name,
            payment_type_id: expense.payment_type_id,
            payment_type_name,
            amount: expense.amount,
            description: expense.description,
            date: expense.date,
            receipt: expense.receipt,
            created_at: expense.created_at,
            created_by: expense.created_by,
        }
    }
}
