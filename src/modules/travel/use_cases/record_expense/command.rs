use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDetails {
    pub trip_id: String,
    pub category_id: String,
    pub payment_type_id: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub receipt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordExpense {
    pub expense_id: String,
    pub details: ExpenseDetails,
    pub created_at: i64,
    pub created_by: String,
}

/// Whether each id an expense points at resolves right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseReferences {
    pub trip_exists: bool,
    pub category_exists: bool,
    pub payment_type_exists: bool,
}
