// Pure decision functions for recording and editing an expense.
//
// An expense may only point at a trip, category and payment type that exist
// when it is written, and its amount must be positive and at most
// `MAX_AMOUNT`.

use rust_decimal::Decimal;

use crate::modules::travel::core::expense::Expense;
use crate::shared::core::aggregation::MAX_AMOUNT;
use crate::modules::travel::use_cases::record_expense::command::{
    ExpenseDetails, ExpenseReferences, RecordExpense,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("amount must not exceed 1000000000")]
    AmountTooLarge,

    #[error("trip {0} does not exist")]
    UnknownTrip(String),

    #[error("category {0} does not exist")]
    UnknownCategory(String),

    #[error("payment type {0} does not exist")]
    UnknownPaymentType(String),
}

fn validate(details: &ExpenseDetails, references: ExpenseReferences) -> Result<(), DecideError> {
    if details.amount <= Decimal::ZERO {
        return Err(DecideError::NonPositiveAmount);
    }
    if details.amount > MAX_AMOUNT {
        return Err(DecideError::AmountTooLarge);
    }
    if !references.trip_exists {
        return Err(DecideError::UnknownTrip(details.trip_id.clone()));
    }
    if !references.category_exists {
        return Err(DecideError::UnknownCategory(details.category_id.clone()));
    }
    if !references.payment_type_exists {
        return Err(DecideError::UnknownPaymentType(
            details.payment_type_id.clone(),
        ));
    }
    Ok(())
}

pub fn decide_record_expense(
    command: RecordExpense,
    references: ExpenseReferences,
) -> Result<Expense, DecideError> {
    validate(&command.details, references)?;
    let details = command.details;
    Ok(Expense {
        expense_id: command.expense_id,
        trip_id: details.trip_id,
        category_id: details.category_id,
        payment_type_id: details.payment_type_id,
        amount: details.amount,
        description: details.description,
        date: details.date,
        receipt: details.receipt,
        created_at: command.created_at,
        created_by: command.created_by,
    })
}

/// Replaces the editable fields of `current`. A missing receipt keeps the
/// one already attached.
pub fn decide_update_expense(
    current: &Expense,
    details: ExpenseDetails,
    references: ExpenseReferences,
) -> Result<Expense, DecideError> {
    validate(&details, references)?;
    Ok(Expense {
        expense_id: current.expense_id.clone(),
        trip_id: details.trip_id,
        category_id: details.category_id,
        payment_type_id: details.payment_type_id,
        amount: details.amount,
        description: details.description,
        date: details.date,
        receipt: details.receipt.or_else(|| current.receipt.clone()),
        created_at: current.created_at,
        created_by: current.created_by.clone(),
    })
}

#[cfg(test)]
mod record_expense_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::RecordExpenseBuilder;
    use crate::tests::fixtures::expenses::ExpenseBuilder;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    const ALL_RESOLVED: ExpenseReferences = ExpenseReferences {
        trip_exists: true,
        category_exists: true,
        payment_type_exists: true,
    };

    #[fixture]
    fn command() -> RecordExpense {
        RecordExpenseBuilder::new().build()
    }

    #[rstest]
    fn it_should_record_the_expense(command: RecordExpense) {
        let expense = decide_record_expense(command.clone(), ALL_RESOLVED).unwrap();
        assert_eq!(expense.expense_id, command.expense_id);
        assert_eq!(expense.amount, command.details.amount);
        assert_eq!(expense.payment_type_id, command.details.payment_type_id);
        assert_eq!(expense.created_by, command.created_by);
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-10))]
    fn it_should_reject_a_non_positive_amount(#[case] amount: Decimal) {
        let command = RecordExpenseBuilder::new().amount(amount).build();
        assert_eq!(
            decide_record_expense(command, ALL_RESOLVED),
            Err(DecideError::NonPositiveAmount)
        );
    }

    #[rstest]
    #[case(Decimal::MAX)]
    #[case(MAX_AMOUNT + dec!(0.01))]
    fn it_should_reject_an_amount_above_the_ceiling(#[case] amount: Decimal) {
        let command = RecordExpenseBuilder::new().amount(amount).build();
        assert_eq!(
            decide_record_expense(command, ALL_RESOLVED),
            Err(DecideError::AmountTooLarge)
        );
        let edit = RecordExpenseBuilder::new().amount(amount).build().details;
        assert_eq!(
            decide_update_expense(&ExpenseBuilder::new().build(), edit, ALL_RESOLVED),
            Err(DecideError::AmountTooLarge)
        );
    }

    #[rstest]
    fn it_should_accept_the_ceiling_itself() {
        let command = RecordExpenseBuilder::new().amount(MAX_AMOUNT).build();
        assert!(decide_record_expense(command, ALL_RESOLVED).is_ok());
    }

    #[rstest]
    #[case(
        ExpenseReferences { trip_exists: false, ..ALL_RESOLVED },
        DecideError::UnknownTrip("trip-fixed-0001".into())
    )]
    #[case(
        ExpenseReferences { category_exists: false, ..ALL_RESOLVED },
        DecideError::UnknownCategory("cat-food".into())
    )]
    #[case(
        ExpenseReferences { payment_type_exists: false, ..ALL_RESOLVED },
        DecideError::UnknownPaymentType("pt-cash".into())
    )]
    fn it_should_reject_dangling_references(
        command: RecordExpense,
        #[case] references: ExpenseReferences,
        #[case] expected: DecideError,
    ) {
        assert_eq!(decide_record_expense(command, references), Err(expected));
    }

    #[rstest]
    fn it_should_keep_the_receipt_when_an_edit_omits_it() {
        let current = ExpenseBuilder::new().receipt(Some("receipt-1.jpg")).build();
        let details = RecordExpenseBuilder::new()
            .amount(dec!(42))
            .receipt(None)
            .build()
            .details;
        let edited = decide_update_expense(&current, details, ALL_RESOLVED).unwrap();
        assert_eq!(edited.amount, dec!(42));
        assert_eq!(edited.receipt.as_deref(), Some("receipt-1.jpg"));
        assert_eq!(edited.created_by, current.created_by);
    }

    #[rstest]
    fn it_should_replace_the_receipt_when_an_edit_brings_one() {
        let current = ExpenseBuilder::new().receipt(Some("receipt-1.jpg")).build();
        let details = RecordExpenseBuilder::new()
            .receipt(Some("receipt-2.jpg"))
            .build()
            .details;
        let edited = decide_update_expense(&current, details, ALL_RESOLVED).unwrap();
        assert_eq!(edited.receipt.as_deref(), Some("receipt-2.jpg"));
    }
}
