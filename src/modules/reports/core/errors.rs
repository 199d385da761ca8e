use thiserror::Error;

use crate::shared::core::aggregation::AmountOverflow;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("trip not found")]
    TripNotFound,

    #[error(transparent)]
    Overflow(#[from] AmountOverflow),
}
