use crate::domain::{
    BookingId, Page,
    booking::{Booking, NewBooking},
};
use crate::ports::booking_store::BookingStore as BookingStoreTrait;
use crate::ports::{Result, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::paginate;

/// In-memory implementation of BookingStore
#[derive(Default)]
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    async fn add(&self, booking: NewBooking) -> Result<Booking> {
        let now = Utc::now();
        let stored = Booking {
            id: booking.id,
            member_id: booking.member_id,
            class_id: booking.class_id,
            class_date: booking.class_date,
            booked_at: now,
            updated_at: now,
        };

        self.bookings.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, booking_id: BookingId) -> Result<Booking> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, booking_id: BookingId) -> Result<()> {
        self.bookings.write().await.retain(|b| b.id != booking_id);
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<Booking>> {
        Ok(paginate(&self.bookings.read().await, page))
    }
}
