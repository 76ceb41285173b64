use crate::domain::{ValidationError, booking::ClassDateOutOfRange};
use crate::ports::StoreError;
use thiserror::Error;

/// Application layer errors
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Client data failed validation
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The requested entity does not exist
    #[error("not found")]
    NotFound,

    /// The booking references an unknown member
    #[error("member not found")]
    MemberNotFound,

    /// The booking references an unknown class
    #[error("class not found")]
    ClassNotFound,

    /// The booked day is outside the class range
    #[error("invalid class date")]
    InvalidClassDate,

    /// Store failure, with the operation that hit it
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApplicationError {
    /// Maps a store error, turning the not-found signal into `NotFound` and a
    /// rule violation found by the store into `InvalidData`.
    pub(crate) fn from_store(context: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApplicationError::NotFound,
            StoreError::Invalid(e) => e.into(),
            source => ApplicationError::Store { context, source },
        }
    }

    /// Wraps a store error without interpreting it.
    pub(crate) fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ApplicationError::Store { context, source }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        ApplicationError::InvalidData(err.to_string())
    }
}

impl From<ClassDateOutOfRange> for ApplicationError {
    fn from(_: ClassDateOutOfRange) -> Self {
        ApplicationError::InvalidClassDate
    }
}

/// Application layer Result type
pub type Result<T> = std::result::Result<T, ApplicationError>;
