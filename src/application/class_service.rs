use crate::domain::{
    ClassId, PageInfo,
    class::{Class, NewClass},
    commands::{AddClass, UpdateClass},
};

use super::ServiceDependencies;
use super::errors::{ApplicationError, Result};

/// Creates a class.
///
/// # Arguments
/// * `deps` - store dependencies
/// * `cmd` - name, date range and capacity
///
/// # Returns
/// The stored class, with its identity and timestamps
///
/// # Errors
/// - InvalidData: empty name, non-positive capacity, or start after end
///   (checked in that order)
/// - Store: the insert failed
pub async fn add_class(deps: &ServiceDependencies, cmd: AddClass) -> Result<Class> {
    let class = NewClass::create(cmd)?;

    let added = deps
        .class_store
        .add(class)
        .await
        .map_err(ApplicationError::store("failed to add class to store"))?;

    tracing::info!(
        class_id = %added.id,
        start = %added.start_date,
        end = %added.end_date,
        "class added"
    );
    Ok(added)
}

/// Looks up a class.
///
/// # Errors
/// - NotFound: no class has this ID
pub async fn get_class(deps: &ServiceDependencies, class_id: ClassId) -> Result<Class> {
    deps.class_store
        .get_by_id(class_id)
        .await
        .map_err(|e| ApplicationError::from_store("failed to get class", e))
}

/// Updates the supplied fields.
///
/// The class after the update must satisfy the same rules as a new one. The
/// store merges and checks the patch in the same unit of work as the write,
/// so a concurrent update cannot slip an inverted range past validation.
/// An empty update returns the class as is.
///
/// # Arguments
/// * `class_id` - the class to change
/// * `update` - fields to replace; `None` keeps the stored value
///
/// # Errors
/// - NotFound: no class has this ID
/// - InvalidData: the updated class would break a validation rule
pub async fn update_class(
    deps: &ServiceDependencies,
    class_id: ClassId,
    update: UpdateClass,
) -> Result<Class> {
    if update.is_empty() {
        return get_class(deps, class_id).await;
    }

    let updated = deps
        .class_store
        .update(class_id, update)
        .await
        .map_err(|e| ApplicationError::from_store("failed to update class in store", e))?;

    tracing::debug!(%class_id, "class updated");
    Ok(updated)
}

/// Deletes a class. Unknown IDs succeed.
///
/// Bookings of the class are left in place.
pub async fn delete_class(deps: &ServiceDependencies, class_id: ClassId) -> Result<()> {
    deps.class_store
        .delete(class_id)
        .await
        .map_err(ApplicationError::store("failed to delete class"))?;

    tracing::debug!(%class_id, "class deleted");
    Ok(())
}

/// Lists classes in creation order.
///
/// # Arguments
/// * `page_info` - requested page; the limit is clamped to 1..=100 and zero
///   means the maximum
pub async fn list_classes(deps: &ServiceDependencies, page_info: PageInfo) -> Result<Vec<Class>> {
    deps.class_store
        .list(page_info.clamp())
        .await
        .map_err(ApplicationError::store("failed to list classes"))
}
