mod booking_service;
mod class_service;
mod errors;
mod member_service;

pub use booking_service::{book_class, delete_booking, get_booking, list_bookings};
pub use class_service::{add_class, delete_class, get_class, list_classes, update_class};
pub use errors::{ApplicationError, Result};
pub use member_service::{add_member, delete_member, get_member, list_members, update_member};

use crate::ports::{BookingStore, ClassStore, MemberStore};
use std::sync::Arc;

/// Stores the usecases run against
///
/// Plain data with no behaviour: every usecase is a free function taking
/// `&ServiceDependencies`, so each one states exactly which stores it reads.
/// Swapping Postgres for the in-memory adapters only changes how this struct
/// is filled.
#[derive(Clone)]
pub struct ServiceDependencies {
    pub member_store: Arc<dyn MemberStore>,
    pub class_store: Arc<dyn ClassStore>,
    pub booking_store: Arc<dyn BookingStore>,
}
