use crate::domain::{
    ClassId, Page,
    class::{Class, NewClass, validate_class_update},
    commands::UpdateClass,
};
use crate::ports::class_store::ClassStore as ClassStoreTrait;
use crate::ports::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row, postgres::PgRow};

const CLASS_COLUMNS: &str = "id, name, start_date, end_date, capacity, created_at, updated_at";

/// Maps a `classes` row to a Class
fn map_row_to_class(row: &PgRow) -> std::result::Result<Class, sqlx::Error> {
    Ok(Class {
        id: ClassId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        capacity: row.try_get("capacity")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Builds `UPDATE classes SET ...` touching only the supplied columns
fn build_update(class_id: ClassId, update: UpdateClass) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new("UPDATE classes SET updated_at = GREATEST(now(), updated_at)");

    if let Some(name) = update.name {
        builder.push(", name = ").push_bind(name);
    }
    if let Some(start_date) = update.start_date {
        builder.push(", start_date = ").push_bind(start_date);
    }
    if let Some(end_date) = update.end_date {
        builder.push(", end_date = ").push_bind(end_date);
    }
    if let Some(capacity) = update.capacity {
        builder.push(", capacity = ").push_bind(capacity);
    }

    builder.push(" WHERE id = ").push_bind(class_id.value());
    builder.push(" RETURNING ").push(CLASS_COLUMNS);
    builder
}

/// PostgreSQL implementation of ClassStore
pub struct ClassStore {
    pool: PgPool,
}

impl ClassStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassStoreTrait for ClassStore {
    async fn add(&self, class: NewClass) -> Result<Class> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO classes (id, name, start_date, end_date, capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CLASS_COLUMNS}
            "#
        ))
        .bind(class.id.value())
        .bind(&class.name)
        .bind(class.start_date)
        .bind(class.end_date)
        .bind(class.capacity)
        .fetch_one(&mut *tx)
        .await?;

        let stored = map_row_to_class(&row)?;
        tx.commit().await?;

        Ok(stored)
    }

    async fn get_by_id(&self, class_id: ClassId) -> Result<Class> {
        let row = sqlx::query(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(class_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_class(&row)?)
    }

    async fn update(&self, class_id: ClassId, update: UpdateClass) -> Result<Class> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so the merged range is validated against what gets
        // written; a concurrent update waits for this transaction.
        let current = sqlx::query(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1 FOR UPDATE"
        ))
        .bind(class_id.value())
        .fetch_one(&mut *tx)
        .await?;

        // an early return drops the transaction, which rolls it back
        validate_class_update(&map_row_to_class(&current)?, &update)?;

        let row = build_update(class_id, update)
            .build()
            .fetch_one(&mut *tx)
            .await?;

        let updated = map_row_to_class(&row)?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, class_id: ClassId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(class_id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<Class>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {CLASS_COLUMNS}
            FROM classes
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(map_row_to_class)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
    }
}
