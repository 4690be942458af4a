//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error.
///
/// Every variant here is user-recoverable: the session facade surfaces these
/// as notifications rather than propagating them to the trigger source. There
/// are no fatal errors in this domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A capacity-bounded collection rejected an insertion (compare list full).
    #[error("capacity exceeded: at most {capacity} entries allowed")]
    CapacityExceeded { capacity: usize },

    /// A value failed validation (e.g. malformed form input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
