use crate::modules::travel::core::ports::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("{entity} {id} is used by {count} expense(s)")]
    InUse {
        entity: &'static str,
        id: String,
        count: usize,
    },
}

impl ApplicationError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
