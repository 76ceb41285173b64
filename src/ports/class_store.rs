use crate::domain::{
    ClassId, Page,
    class::{Class, NewClass},
    commands::UpdateClass,
};
use async_trait::async_trait;

use super::error::Result;

/// Class store port
///
/// Implementations own the date-range invariant on update: the patch is
/// merged and validated against the stored row within the same unit of work
/// that writes it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Inserts an already validated class.
    ///
    /// # Returns
    /// The stored class with `created_at` and `updated_at` set by the store
    async fn add(&self, class: NewClass) -> Result<Class>;

    /// Returns `StoreError::NotFound` when no class has this ID.
    async fn get_by_id(&self, class_id: ClassId) -> Result<Class>;

    /// Replaces only the supplied fields and bumps `updated_at`.
    ///
    /// The row is locked, merged with `update` and checked with
    /// [`validate_class_update`](crate::domain::class::validate_class_update)
    /// before anything is written.
    ///
    /// # Errors
    /// - `StoreError::NotFound`: no class has this ID
    /// - `StoreError::Invalid`: the merged class breaks a validation rule;
    ///   nothing is written
    async fn update(&self, class_id: ClassId, update: UpdateClass) -> Result<Class>;

    /// Deleting an unknown ID is not an error. Bookings of the class are kept.
    async fn delete(&self, class_id: ClassId) -> Result<()>;

    /// Returns one page of classes ordered by `created_at`, then ID.
    async fn list(&self, page: Page) -> Result<Vec<Class>>;
}
