// Command builders, seeded from the same JSON as the entity fixtures so that
// a built command and a built entity describe the same row.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::travel::use_cases::create_trip::command::{CreateTrip, TripDetails};
use crate::modules::travel::use_cases::record_expense::command::{ExpenseDetails, RecordExpense};
use crate::tests::fixtures::expenses::load_expense_dto;
use crate::tests::fixtures::trips::load_trip_dto;

pub struct CreateTripBuilder {
    inner: CreateTrip,
}

impl Default for CreateTripBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateTripBuilder {
    pub fn new() -> Self {
        let dto = load_trip_dto();
        Self {
            inner: CreateTrip {
                trip_id: dto.trip_id,
                details: TripDetails {
                    main_destination: dto.main_destination,
                    main_reason: dto.main_reason,
                    other_destinations: dto.other_destinations,
                    companions: dto.companions,
                    distance: dto.distance,
                    fuel_consumption: dto.fuel_consumption,
                    start_date: dto.start_date,
                    end_date: dto.end_date,
                    initial_cash: dto.initial_cash,
                },
                created_at: 1700000000000,
                created_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn trip_id(mut self, v: impl Into<String>) -> Self {
        self.inner.trip_id = v.into();
        self
    }

    pub fn main_destination(mut self, v: impl Into<String>) -> Self {
        self.inner.details.main_destination = v.into();
        self
    }

    pub fn main_reason(mut self, v: impl Into<String>) -> Self {
        self.inner.details.main_reason = v.into();
        self
    }

    pub fn distance(mut self, v: Option<Decimal>) -> Self {
        self.inner.details.distance = v;
        self
    }

    pub fn fuel_consumption(mut self, v: Option<Decimal>) -> Self {
        self.inner.details.fuel_consumption = v;
        self
    }

    pub fn start_date(mut self, v: NaiveDate) -> Self {
        self.inner.details.start_date = v;
        self
    }

    pub fn end_date(mut self, v: NaiveDate) -> Self {
        self.inner.details.end_date = v;
        self
    }

    pub fn initial_cash(mut self, v: Decimal) -> Self {
        self.inner.details.initial_cash = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> CreateTrip {
        self.inner
    }
}

pub struct RecordExpenseBuilder {
    inner: RecordExpense,
}

impl Default for RecordExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordExpenseBuilder {
    pub fn new() -> Self {
        let dto = load_expense_dto();
        Self {
            inner: RecordExpense {
                expense_id: dto.expense_id,
                details: ExpenseDetails {
                    trip_id: dto.trip_id,
                    category_id: dto.category_id,
                    payment_type_id: dto.payment_type_id,
                    amount: dto.amount,
                    description: dto.description,
                    date: dto.date,
                    receipt: dto.receipt,
                },
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
        self.inner.details.trip_id = v.into();
        self
    }

    pub fn category_id(mut self, v: impl Into<String>) -> Self {
        self.inner.details.category_id = v.into();
        self
    }

    pub fn payment_type_id(mut self, v: impl Into<String>) -> Self {
        self.inner.details.payment_type_id = v.into();
        self
    }

    pub fn amount(mut self, v: Decimal) -> Self {
        self.inner.details.amount = v;
        self
    }

    pub fn receipt(mut self, v: Option<&str>) -> Self {
        self.inner.details.receipt = v.map(str::to_string);
        self
    }

    pub fn build(self) -> RecordExpense {
        self.inner
    }
}
