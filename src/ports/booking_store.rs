use crate::domain::{
    BookingId, Page,
    booking::{Booking, NewBooking},
};
use async_trait::async_trait;

use super::error::Result;

/// Booking store port
///
/// The store does not check that the referenced member and class exist; the
/// booking service validates them before calling `add`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Inserts a booking and returns it with `booked_at` and `updated_at` set.
    async fn add(&self, booking: NewBooking) -> Result<Booking>;

    /// Returns `StoreError::NotFound` when no booking has this ID.
    async fn get_by_id(&self, booking_id: BookingId) -> Result<Booking>;

    /// Deleting an unknown ID is not an error.
    async fn delete(&self, booking_id: BookingId) -> Result<()>;

    /// Returns one page of bookings ordered by `booked_at`, then ID.
    async fn list(&self, page: Page) -> Result<Vec<Booking>>;
}
