use crate::domain::ValidationError;
use thiserror::Error;

/// Store-level failure shared by every store port
///
/// Callers branch on `NotFound` and `Invalid`; anything else is an opaque
/// backend failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The query matched no row
    #[error("record not found")]
    NotFound,

    /// A write would leave the row breaking a validation rule
    ///
    /// Raised by stores that validate inside their own unit of work, against
    /// the row as it is at write time.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Connectivity, constraint, or decoding failure in the backend
    #[error("store backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
