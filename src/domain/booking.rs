use chrono::{DateTime, NaiveDate, Utc};

use super::{BookingId, ClassId, MemberId, class::Class, commands::BookClass};

/// A member's reservation for one day of a class
///
/// Existence is the only state: a booking is active until it is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub member_id: MemberId,
    pub class_id: ClassId,
    pub class_date: NaiveDate,
    pub booked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking that passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub id: BookingId,
    pub member_id: MemberId,
    pub class_id: ClassId,
    pub class_date: NaiveDate,
}

/// The requested day lies outside the class range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDateOutOfRange {
    pub class_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Builds a booking for `class` once the member is known to exist.
///
/// The class range is only checked here, at creation; later edits to the
/// class do not invalidate existing bookings.
///
/// # Arguments
/// * `cmd` - member, class and requested day
/// * `class` - the class as currently stored
///
/// # Returns
/// A booking with a fresh identity, ready to be stored
///
/// # Errors
/// - ClassDateOutOfRange: `cmd.class_date` is before `start_date` or after
///   `end_date`
pub fn book_class(cmd: &BookClass, class: &Class) -> Result<NewBooking, ClassDateOutOfRange> {
    if !class.runs_on(cmd.class_date) {
        return Err(ClassDateOutOfRange {
            class_date: cmd.class_date,
            start_date: class.start_date,
            end_date: class.end_date,
        });
    }

    Ok(NewBooking {
        id: BookingId::new(),
        member_id: cmd.member_id,
        class_id: class.id,
        class_date: cmd.class_date,
    })
}
