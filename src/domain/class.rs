use chrono::{DateTime, NaiveDate, Utc};

use super::{
    ClassId, ValidationError,
    commands::{AddClass, UpdateClass},
};

/// A scheduled class as persisted by the store
///
/// `start_date..=end_date` is the inclusive range of days the class can be
/// booked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Class {
    /// Whether `date` falls inside the class range (both ends inclusive).
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// The class as it would look after `update` is applied.
    pub fn merged_with(&self, update: &UpdateClass) -> Class {
        Class {
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            start_date: update.start_date.unwrap_or(self.start_date),
            end_date: update.end_date.unwrap_or(self.end_date),
            capacity: update.capacity.unwrap_or(self.capacity),
            ..self.clone()
        }
    }
}

/// A validated class that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub id: ClassId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
}

impl NewClass {
    /// Validates the command and assigns a fresh identity.
    ///
    /// Rules run in order: name, capacity, date range.
    ///
    /// # Errors
    /// - MissingClassName: the name is empty
    /// - NonPositiveCapacity: capacity is zero or negative
    /// - StartAfterEnd: `start_date` is later than `end_date`
    pub fn create(cmd: AddClass) -> Result<Self, ValidationError> {
        validate_class_fields(&cmd.name, cmd.capacity, cmd.start_date, cmd.end_date)?;

        Ok(Self {
            id: ClassId::new(),
            name: cmd.name,
            start_date: cmd.start_date,
            end_date: cmd.end_date,
            capacity: cmd.capacity,
        })
    }
}

/// Validates an update against the class it would modify.
///
/// The merged result must satisfy the same rules as a new class. Stores call
/// this while holding the row, so `current` is what the write replaces.
///
/// # Arguments
/// * `current` - the stored class
/// * `update` - the patch about to be applied
///
/// # Errors
/// Same as [`NewClass::create`], evaluated on the merged class
pub fn validate_class_update(current: &Class, update: &UpdateClass) -> Result<(), ValidationError> {
    let merged = current.merged_with(update);
    validate_class_fields(
        &merged.name,
        merged.capacity,
        merged.start_date,
        merged.end_date,
    )
}

fn validate_class_fields(
    name: &str,
    capacity: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingClassName);
    }

    if capacity <= 0 {
        return Err(ValidationError::NonPositiveCapacity(capacity));
    }

    if start_date > end_date {
        return Err(ValidationError::StartAfterEnd {
            start: start_date,
            end: end_date,
        });
    }

    Ok(())
}
