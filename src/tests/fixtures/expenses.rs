// Canonical expense for tests, loaded from json/expense.json.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::travel::core::expense::Expense;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseDto {
    pub expense_id: String,
    pub trip_id: String,
    pub category_id: String,
    pub payment_type_id: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub receipt: Option<String>,
}

pub fn load_expense_dto() -> ExpenseDto {
    serde_json::from_str(include_str!("json/expense.json")).unwrap()
}

pub struct ExpenseBuilder {
    inner: Expense,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ExpenseBuilder {
    pub fn new() -> Self {
        let dto = load_expense_dto();
        Self {
            inner: Expense {
                expense_id: dto.expense_id,
                trip_id: dto.trip_id,
                category_id: dto.category_id,
                payment_type_id: dto.payment_type_id,
                amount: dto.amount,
                description: dto.description,
                date: dto.date,
                receipt: dto.receipt,
                created_at: 1700000000000,
                created_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn expense_id(mut self, v: impl Into<String>) -> Self {
        self.inner.expense_id = v.into();
        self
    }

    pub fn trip_id(mut self, v: impl Into<String>) -> Self {
        self.inner.trip_id = v.into();
        self
    }

    pub fn category_id(mut self, v: impl Into<String>) -> Self {
        self.inner.category_id = v.into();
        self
    }

    pub fn payment_type_id(mut self, v: impl Into<String>) -> Self {
        self.inner.payment_type_id = v.into();
        self
    }

    pub fn amount(mut self, v: Decimal) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn receipt(mut self, v: Option<&str>) -> Self {
        self.inner.receipt = v.map(str::to_string);
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Expense {
        self.inner
    }
}
