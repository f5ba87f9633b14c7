use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{event::CreateBooking, Booking, BookingStatus},
    id::BookingId,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    /// Persists the booking with a fresh id; `status` defaults to
    /// `Confirmed` and `created_at` is set here.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    /// Replaces the status, returning `None` when the id does not resolve.
    /// Any status value is accepted; there is no closed set.
    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>>;
}
