use crate::domain::{
    self, BookingId, PageInfo,
    booking::Booking,
    class::Class,
    commands::BookClass,
};

use super::errors::{ApplicationError, Result};
use super::{ServiceDependencies, class_service::get_class, member_service::get_member};

/// Books a member into a class on `cmd.class_date`.
///
/// Business rules, checked in order:
/// - the member exists
/// - the class exists
/// - `start_date <= class_date <= end_date`
///
/// Capacity is not checked against existing bookings.
///
/// # Arguments
/// * `deps` - store dependencies; reads members and classes, writes bookings
/// * `cmd` - member, class and the day booked
///
/// # Returns
/// The stored booking, with `booked_at` and `updated_at` set by the store
///
/// # Errors
/// - MemberNotFound / ClassNotFound: unknown reference
/// - InvalidClassDate: the day is outside the class range
/// - Store: lookup or insert failed in the backend
pub async fn book_class(deps: &ServiceDependencies, cmd: BookClass) -> Result<Booking> {
    // 1. Resolve the member and the class
    let class = validate_references(deps, &cmd).await?;

    // 2. Check the day against the class range
    let booking = domain::booking::book_class(&cmd, &class)?;

    // 3. Persist
    let booked = deps
        .booking_store
        .add(booking)
        .await
        .map_err(ApplicationError::store("failed to add booking to store"))?;

    tracing::info!(
        booking_id = %booked.id,
        member_id = %booked.member_id,
        class_id = %booked.class_id,
        class_date = %booked.class_date,
        "class booked"
    );
    Ok(booked)
}

/// Looks up a booking.
///
/// # Errors
/// - NotFound: no booking has this ID
pub async fn get_booking(deps: &ServiceDependencies, booking_id: BookingId) -> Result<Booking> {
    deps.booking_store
        .get_by_id(booking_id)
        .await
        .map_err(|e| ApplicationError::from_store("failed to get booking", e))
}

/// Deletes a booking. Unknown IDs succeed.
pub async fn delete_booking(deps: &ServiceDependencies, booking_id: BookingId) -> Result<()> {
    deps.booking_store
        .delete(booking_id)
        .await
        .map_err(ApplicationError::store("failed to delete booking"))?;

    tracing::debug!(%booking_id, "booking deleted");
    Ok(())
}

/// Lists bookings in the order they were made.
///
/// # Arguments
/// * `page_info` - requested page; the limit is clamped to 1..=100 and zero
///   means the maximum
pub async fn list_bookings(
    deps: &ServiceDependencies,
    page_info: PageInfo,
) -> Result<Vec<Booking>> {
    deps.booking_store
        .list(page_info.clamp())
        .await
        .map_err(ApplicationError::store("failed to list bookings"))
}

/// Resolves the member and class a booking refers to.
///
/// Any failure of either lookup ends validation immediately.
async fn validate_references(deps: &ServiceDependencies, cmd: &BookClass) -> Result<Class> {
    get_member(deps, cmd.member_id)
        .await
        .map_err(|e| match e {
            ApplicationError::NotFound => ApplicationError::MemberNotFound,
            other => other,
        })?;

    get_class(deps, cmd.class_id)
        .await
        .map_err(|e| match e {
            ApplicationError::NotFound => ApplicationError::ClassNotFound,
            other => other,
        })
}
