// Canonical trip for tests, loaded from json/trip.json.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::travel::core::trip::{Trip, TripStatus};

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    pub trip_id: String,
    pub main_destination: String,
    pub main_reason: String,
    pub other_destinations: Option<String>,
    pub companions: Option<String>,
    pub distance: Option<Decimal>,
    pub fuel_consumption: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: Decimal,
}

pub fn load_trip_dto() -> TripDto {
    serde_json::from_str(include_str!("json/trip.json")).unwrap()
}

pub struct TripBuilder {
    inner: Trip,
}

impl Default for TripBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TripBuilder {
    pub fn new() -> Self {
        let dto = load_trip_dto();
        Self {
            inner: Trip {
                trip_id: dto.trip_id,
                main_destination: dto.main_destination,
                main_reason: dto.main_reason,
                other_destinations: dto.other_destinations,
                companions: dto.companions,
                distance: dto.distance,
                fuel_consumption: dto.fuel_consumption,
                estimated_fuel_cost: None,
                start_date: dto.start_date,
                end_date: dto.end_date,
                initial_cash: dto.initial_cash,
                status: TripStatus::Planned,
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
        self.inner.main_destination = v.into();
        self
    }

    pub fn distance(mut self, v: Option<Decimal>) -> Self {
        self.inner.distance = v;
        self
    }

    pub fn fuel_consumption(mut self, v: Option<Decimal>) -> Self {
        self.inner.fuel_consumption = v;
        self
    }

    pub fn estimated_fuel_cost(mut self, v: Option<Decimal>) -> Self {
        self.inner.estimated_fuel_cost = v;
        self
    }

    pub fn initial_cash(mut self, v: Decimal) -> Self {
        self.inner.initial_cash = v;
        self
    }

    pub fn status(mut self, v: TripStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> Trip {
        self.inner
    }
}
