use thiserror::Error;

use crate::catalog::CatalogError;

/// Ordering errors
///
/// A failed mutation never leaves partial changes behind.
#[derive(Debug, Error)]
pub enum OrderingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The expected run does not appear anywhere in the working order
    #[error("Expected range of {} ids not found in current order", expected.len())]
    Conflict { expected: Vec<u32>, current: Vec<u32> },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type OrderingResult<T> = Result<T, OrderingError>;
