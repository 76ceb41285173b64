use chrono::NaiveDate;

use super::{ClassId, MemberId};

/// Command: register a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMember {
    pub name: String,
}

/// Command: partially update a member
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMember {
    pub name: Option<String>,
}

impl UpdateMember {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Command: create a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClass {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
}

/// Command: partially update a class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateClass {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
}

impl UpdateClass {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.capacity.is_none()
    }
}

/// Command: book a member into a class on a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookClass {
    pub member_id: MemberId,
    pub class_id: ClassId,
    pub class_date: NaiveDate,
}
