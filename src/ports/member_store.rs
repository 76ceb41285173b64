use crate::domain::{
    MemberId, Page,
    commands::UpdateMember,
    member::{Member, NewMember},
};
use async_trait::async_trait;

use super::error::Result;

/// Member store port
///
/// Persists members. Timestamps are assigned by the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Inserts a member and returns it with its timestamps.
    async fn add(&self, member: NewMember) -> Result<Member>;

    /// Returns `StoreError::NotFound` when no member has this ID.
    async fn get_by_id(&self, member_id: MemberId) -> Result<Member>;

    /// Applies the supplied fields and bumps `updated_at`.
    ///
    /// Returns `StoreError::NotFound` when no member has this ID.
    async fn update(&self, member_id: MemberId, update: UpdateMember) -> Result<Member>;

    /// Deleting an unknown ID is not an error.
    async fn delete(&self, member_id: MemberId) -> Result<()>;

    /// Returns one page of members ordered by `created_at`, then ID.
    async fn list(&self, page: Page) -> Result<Vec<Member>>;
}
