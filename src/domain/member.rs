use chrono::{DateTime, Utc};

use super::{MemberId, ValidationError, commands::UpdateMember};

/// A registered member as persisted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated member that has not been stored yet
///
/// Timestamps are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub id: MemberId,
    pub name: String,
}

impl NewMember {
    /// Validates the name and assigns a fresh identity.
    ///
    /// # Errors
    /// - MissingMemberName: `name` is empty
    pub fn create(name: String) -> Result<Self, ValidationError> {
        validate_member_name(&name)?;

        Ok(Self {
            id: MemberId::new(),
            name,
        })
    }
}

/// Checks the fields an update supplies.
pub fn validate_member_update(update: &UpdateMember) -> Result<(), ValidationError> {
    match &update.name {
        Some(name) => validate_member_name(name),
        None => Ok(()),
    }
}

fn validate_member_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingMemberName);
    }
    Ok(())
}
