use crate::domain::{
    MemberId, PageInfo,
    commands::{AddMember, UpdateMember},
    member::{Member, NewMember, validate_member_update},
};

use super::ServiceDependencies;
use super::errors::{ApplicationError, Result};

/// Registers a member.
///
/// # Arguments
/// * `deps` - store dependencies
/// * `cmd` - the member's name
///
/// # Returns
/// The stored member, with its identity and timestamps
///
/// # Errors
/// - InvalidData: the name is empty
/// - Store: the insert failed
pub async fn add_member(deps: &ServiceDependencies, cmd: AddMember) -> Result<Member> {
    let member = NewMember::create(cmd.name)?;

    let added = deps
        .member_store
        .add(member)
        .await
        .map_err(ApplicationError::store("failed to add member to store"))?;

    tracing::info!(member_id = %added.id, "member added");
    Ok(added)
}

/// Looks up a member.
///
/// # Errors
/// - NotFound: no member has this ID
pub async fn get_member(deps: &ServiceDependencies, member_id: MemberId) -> Result<Member> {
    deps.member_store
        .get_by_id(member_id)
        .await
        .map_err(|e| ApplicationError::from_store("failed to get member", e))
}

/// Updates the supplied fields. An empty update returns the member as is.
///
/// # Arguments
/// * `member_id` - the member to change
/// * `update` - fields to replace; `None` keeps the stored value
///
/// # Errors
/// - InvalidData: a supplied name is empty
/// - NotFound: no member has this ID
pub async fn update_member(
    deps: &ServiceDependencies,
    member_id: MemberId,
    update: UpdateMember,
) -> Result<Member> {
    validate_member_update(&update)?;

    if update.is_empty() {
        return get_member(deps, member_id).await;
    }

    deps.member_store
        .update(member_id, update)
        .await
        .map_err(|e| ApplicationError::from_store("failed to update member in store", e))
}

/// Deletes a member. Unknown IDs succeed.
///
/// Bookings that reference the member are left in place.
pub async fn delete_member(deps: &ServiceDependencies, member_id: MemberId) -> Result<()> {
    deps.member_store
        .delete(member_id)
        .await
        .map_err(ApplicationError::store("failed to delete member"))?;

    tracing::debug!(%member_id, "member deleted");
    Ok(())
}

/// Lists members in creation order.
///
/// # Arguments
/// * `page_info` - requested page; the limit is clamped to 1..=100 and zero
///   means the maximum
///
/// # Returns
/// At most one page of members, empty past the last page
pub async fn list_members(deps: &ServiceDependencies, page_info: PageInfo) -> Result<Vec<Member>> {
    deps.member_store
        .list(page_info.clamp())
        .await
        .map_err(ApplicationError::store("failed to list members"))
}
