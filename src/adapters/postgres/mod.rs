pub mod booking_store;
pub mod class_store;
pub mod member_store;
pub mod pool;
pub mod probe;

use crate::ports::StoreError;

// Re-export the adapters under backend-qualified names
pub use booking_store::BookingStore as PostgresBookingStore;
pub use class_store::ClassStore as PostgresClassStore;
pub use member_store::MemberStore as PostgresMemberStore;
pub use probe::Probe as PostgresProbe;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(Box::new(other)),
        }
    }
}
