use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    ClassId, MemberId, PageInfo,
    booking::Booking,
    class::Class,
    commands::{AddClass, AddMember, BookClass, UpdateClass, UpdateMember},
    member::Member,
};

// ============================================================================
// Members
// ============================================================================

/// POST /members
///
/// A missing name deserializes to "" and is rejected by validation (422),
/// not by the JSON extractor.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddMemberRequest {
    #[serde(default)]
    pub name: String,
}

impl AddMemberRequest {
    pub fn into_command(self) -> AddMember {
        AddMember { name: self.name }
    }
}

/// PATCH /members/:id
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
}

impl UpdateMemberRequest {
    pub fn into_command(self) -> UpdateMember {
        UpdateMember { name: self.name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.value(),
            name: member.name,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

// ============================================================================
// Classes
// ============================================================================

/// POST /classes
#[derive(Debug, Serialize, Deserialize)]
pub struct AddClassRequest {
    #[serde(default)]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub capacity: i32,
}

impl AddClassRequest {
    pub fn into_command(self) -> AddClass {
        AddClass {
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            capacity: self.capacity,
        }
    }
}

/// PATCH /classes/:id
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
}

impl UpdateClassRequest {
    pub fn into_command(self) -> UpdateClass {
        UpdateClass {
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            capacity: self.capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResponse {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Class> for ClassResponse {
    fn from(class: Class) -> Self {
        Self {
            id: class.id.value(),
            name: class.name,
            start_date: class.start_date,
            end_date: class.end_date,
            capacity: class.capacity,
            created_at: class.created_at,
            updated_at: class.updated_at,
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

/// POST /bookings
#[derive(Debug, Serialize, Deserialize)]
pub struct BookClassRequest {
    pub member_id: Uuid,
    pub class_id: Uuid,
    pub class_date: NaiveDate,
}

impl BookClassRequest {
    pub fn into_command(self) -> BookClass {
        BookClass {
            member_id: MemberId::from_uuid(self.member_id),
            class_id: ClassId::from_uuid(self.class_id),
            class_date: self.class_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub class_id: Uuid,
    pub class_date: NaiveDate,
    pub booked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.value(),
            member_id: booking.member_id.value(),
            class_id: booking.class_id.value(),
            class_date: booking.class_date,
            booked_at: booking.booked_at,
            updated_at: booking.updated_at,
        }
    }
}

// ============================================================================
// Shared
// ============================================================================

/// `page` / `limit` query parameters of the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<PageQuery> for PageInfo {
    fn from(query: PageQuery) -> Self {
        PageInfo::new(query.limit.unwrap_or(0), query.page.unwrap_or(0))
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
