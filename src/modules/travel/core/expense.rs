use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: String,
    pub trip_id: String,
    pub category_id: String,
    pub payment_type_id: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    /// Opaque handle of the stored receipt image.
    pub receipt: Option<String>,
    pub created_at: i64,
    pub created_by: String,
}
