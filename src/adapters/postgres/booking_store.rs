use crate::domain::{
    BookingId, ClassId, MemberId, Page,
    booking::{Booking, NewBooking},
};
use crate::ports::booking_store::BookingStore as BookingStoreTrait;
use crate::ports::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Maps a `bookings` row to a Booking
fn map_row_to_booking(row: &PgRow) -> std::result::Result<Booking, sqlx::Error> {
    Ok(Booking {
        id: BookingId::from_uuid(row.try_get("id")?),
        member_id: MemberId::from_uuid(row.try_get("member_id")?),
        class_id: ClassId::from_uuid(row.try_get("class_id")?),
        class_date: row.try_get("class_date")?,
        booked_at: row.try_get("booked_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// PostgreSQL implementation of BookingStore
///
/// `class_date` is a DATE column, so only the calendar day is kept.
pub struct BookingStore {
    pool: PgPool,
}

impl BookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    async fn add(&self, booking: NewBooking) -> Result<Booking> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO bookings (id, member_id, class_id, class_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, member_id, class_id, class_date, booked_at, updated_at
            "#,
        )
        .bind(booking.id.value())
        .bind(booking.member_id.value())
        .bind(booking.class_id.value())
        .bind(booking.class_date)
        .fetch_one(&mut *tx)
        .await?;

        let stored = map_row_to_booking(&row)?;
        tx.commit().await?;

        Ok(stored)
    }

    async fn get_by_id(&self, booking_id: BookingId) -> Result<Booking> {
        let row = sqlx::query(
            r#"
            SELECT id, member_id, class_id, class_date, booked_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_booking(&row)?)
    }

    async fn delete(&self, booking_id: BookingId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking_id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
            SELECT id, member_id, class_id, class_date, booked_at, updated_at
            FROM bookings
            ORDER BY booked_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(map_row_to_booking)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
    }
}
