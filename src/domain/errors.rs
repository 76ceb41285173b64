use thiserror::Error;

/// Validation failures for member and class data
///
/// Variants are checked in declaration order; the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Member name is empty
    #[error("missing member name")]
    MissingMemberName,

    /// Class name is empty
    #[error("missing class name")]
    MissingClassName,

    /// Capacity is zero or negative
    #[error("class capacity must be positive, got {0}")]
    NonPositiveCapacity(i32),

    /// start_date is later than end_date
    #[error("start date {start} cannot be later than end date {end}")]
    StartAfterEnd {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
