//! In-memory store adapters
//!
//! Back the API without a database: tests and local runs. Rows are kept in
//! insertion order, which is also `created_at` order.

pub mod booking_store;
pub mod class_store;
pub mod member_store;
pub mod probe;

pub use booking_store::BookingStore as InMemoryBookingStore;
pub use class_store::ClassStore as InMemoryClassStore;
pub use member_store::MemberStore as InMemoryMemberStore;
pub use probe::Probe as InMemoryProbe;

use crate::domain::Page;
use chrono::{DateTime, Utc};

/// Applies limit/offset to rows already in list order
pub(crate) fn paginate<T: Clone>(rows: &[T], page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(0);

    rows.iter().skip(offset).take(limit).cloned().collect()
}

/// Next `updated_at`, never earlier than the previous one
pub(crate) fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
