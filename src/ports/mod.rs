pub mod booking_store;
pub mod class_store;
pub mod error;
pub mod member_store;
pub mod store_probe;

pub use booking_store::*;
pub use class_store::*;
pub use error::{Result, StoreError};
pub use member_store::*;
pub use store_probe::*;
