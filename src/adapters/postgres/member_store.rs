use crate::domain::{
    MemberId, Page,
    commands::UpdateMember,
    member::{Member, NewMember},
};
use crate::ports::member_store::MemberStore as MemberStoreTrait;
use crate::ports::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Maps a `members` row to a Member
fn map_row_to_member(row: &PgRow) -> std::result::Result<Member, sqlx::Error> {
    Ok(Member {
        id: MemberId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// PostgreSQL implementation of MemberStore
pub struct MemberStore {
    pool: PgPool,
}

impl MemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn add(&self, member: NewMember) -> Result<Member> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO members (id, name)
            VALUES ($1, $2)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(member.id.value())
        .bind(&member.name)
        .fetch_one(&mut *tx)
        .await?;

        let stored = map_row_to_member(&row)?;
        tx.commit().await?;

        Ok(stored)
    }

    async fn get_by_id(&self, member_id: MemberId) -> Result<Member> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(member_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_member(&row)?)
    }

    /// Only `name` is updatable; a missing name keeps the stored one.
    async fn update(&self, member_id: MemberId, update: UpdateMember) -> Result<Member> {
        let mut tx = self.pool.begin().await?;

        // fetch_one turns a zero-row UPDATE into RowNotFound
        let row = sqlx::query(
            r#"
            UPDATE members
            SET name = COALESCE($1, name),
                updated_at = GREATEST(now(), updated_at)
            WHERE id = $2
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(update.name)
        .bind(member_id.value())
        .fetch_one(&mut *tx)
        .await?;

        let updated = map_row_to_member(&row)?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, member_id: MemberId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(member_id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM members
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(map_row_to_member)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
    }
}
