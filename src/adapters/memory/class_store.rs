use crate::domain::{
    ClassId, Page,
    class::{Class, NewClass, validate_class_update},
    commands::UpdateClass,
};
use crate::ports::class_store::ClassStore as ClassStoreTrait;
use crate::ports::{Result, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{paginate, touch};

/// In-memory implementation of ClassStore
#[derive(Default)]
pub struct ClassStore {
    classes: RwLock<Vec<Class>>,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClassStoreTrait for ClassStore {
    async fn add(&self, class: NewClass) -> Result<Class> {
        let now = Utc::now();
        let stored = Class {
            id: class.id,
            name: class.name,
            start_date: class.start_date,
            end_date: class.end_date,
            capacity: class.capacity,
            created_at: now,
            updated_at: now,
        };

        self.classes.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, class_id: ClassId) -> Result<Class> {
        self.classes
            .read()
            .await
            .iter()
            .find(|c| c.id == class_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, class_id: ClassId, update: UpdateClass) -> Result<Class> {
        let mut classes = self.classes.write().await;
        let class = classes
            .iter_mut()
            .find(|c| c.id == class_id)
            .ok_or(StoreError::NotFound)?;

        // checked under the write lock, against the row as stored now
        validate_class_update(class, &update)?;

        *class = Class {
            updated_at: touch(class.updated_at),
            ..class.merged_with(&update)
        };

        Ok(class.clone())
    }

    async fn delete(&self, class_id: ClassId) -> Result<()> {
        self.classes.write().await.retain(|c| c.id != class_id);
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<Class>> {
        Ok(paginate(&self.classes.read().await, page))
    }
}
