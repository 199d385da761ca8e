use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::use_cases::record_expense::command::{ExpenseDetails, RecordExpense};
use crate::shell::graphql::require_actor;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlExpense {
    pub expense_id: String,
    pub trip_id: String,
    pub category_id: String,
    pub payment_type_id: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub receipt: Option<String>,
    pub created_at: i64,
    pub created_by: String,
}

impl From<Expense> for GqlExpense {
    fn from(e: Expense) -> Self {
        Self {
            expense_id: e.expense_id,
            trip_id: e.trip_id,
            category_id: e.category_id,
            payment_type_id: e.payment_type_id,
            amount: e.amount,
            description: e.description,
            date: e.date,
            receipt: e.receipt,
            created_at: e.created_at,
            created_by: e.created_by,
        }
    }
}

#[derive(InputObject)]
pub struct RecordExpenseInput {
    pub trip_id: String,
    pub category_id: String,
    pub payment_type_id: String,
    pub amount: Decimal,
    #[graphql(default)]
    pub description: String,
    pub date: NaiveDate,
    pub receipt: Option<String>,
}

#[derive(Default)]
pub struct RecordExpenseMutation;

#[Object]
impl RecordExpenseMutation {
    async fn record_expense(
        &self,
        context: &Context<'_>,
        input: RecordExpenseInput,
    ) -> GqlResult<GqlExpense> {
        let actor = require_actor(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = RecordExpense {
            expense_id: Uuid::now_v7().to_string(),
            details: ExpenseDetails {
                trip_id: input.trip_id,
                category_id: input.category_id,
                payment_type_id: input.payment_type_id,
                amount: input.amount,
                description: input.description,
                date: input.date,
                receipt: input.receipt,
            },
            created_at: Utc::now().timestamp_millis(),
            created_by: actor.user_id,
        };

        let expense = state
            .record_expense
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(expense.into())
    }
}
