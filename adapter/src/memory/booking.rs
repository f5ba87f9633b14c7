use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus},
    id::BookingId,
};
use kernel::repository::booking::BookingRepository;
use shared::error::AppResult;

use super::lock;

pub struct InMemoryBookingRepository {
    inner: Mutex<BookingStore>,
}

struct BookingStore {
    bookings: BTreeMap<BookingId, Booking>,
    next_id: i64,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BookingStore {
                bookings: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let store = lock(&self.inner)?;
        Ok(store.bookings.values().cloned().collect())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let store = lock(&self.inner)?;
        Ok(store.bookings.get(&booking_id).cloned())
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut store = lock(&self.inner)?;
        let id = BookingId::new(store.next_id);
        store.next_id += 1;
        let booking = Booking {
            id,
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            phone: event.phone,
            room_id: event.room_id,
            check_in: event.check_in,
            check_out: event.check_out,
            guests: event.guests,
            special_requests: event.special_requests,
            total_amount: event.total_amount,
            status: event.status.unwrap_or(BookingStatus::Confirmed),
            created_at: Utc::now(),
        };
        store.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let mut store = lock(&self.inner)?;
        Ok(store.bookings.get_mut(&booking_id).map(|booking| {
            booking.status = status;
            booking.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kernel::model::id::RoomId;

    fn stay(room_id: i64) -> CreateBooking {
        CreateBooking::new(
            "Jane".into(),
            "Doe".into(),
            "jane.doe@example.com".into(),
            "555-0100".into(),
            RoomId::new(room_id),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            2,
            None,
            "548.55".into(),
            None,
        )
    }

    #[tokio::test]
    async fn create_defaults_status_and_sets_created_at() -> anyhow::Result<()> {
        let repo = InMemoryBookingRepository::new();
        let before = Utc::now();

        let booking = repo.create(stay(1)).await?;
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(booking.special_requests.is_none());
        assert!(booking.created_at >= before);

        let found = repo.find_by_id(booking.id).await?;
        assert_eq!(found, Some(booking));
        Ok(())
    }

    #[tokio::test]
    async fn sequential_creates_get_strictly_increasing_ids() -> anyhow::Result<()> {
        let repo = InMemoryBookingRepository::new();
        let a = repo.create(stay(1)).await?;
        let b = repo.create(stay(2)).await?;
        let c = repo.create(stay(3)).await?;
        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(repo.find_all().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_status_accepts_any_value() -> anyhow::Result<()> {
        let repo = InMemoryBookingRepository::new();
        let booking = repo.create(stay(1)).await?;

        let updated = repo
            .update_status(booking.id, BookingStatus::Cancelled)
            .await?
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);

        // No closed set: unknown values are stored verbatim.
        let updated = repo
            .update_status(booking.id, BookingStatus::from("no-show".to_string()))
            .await?
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Other("no-show".into()));
        Ok(())
    }

    #[tokio::test]
    async fn update_status_on_missing_id_changes_nothing() -> anyhow::Result<()> {
        let repo = InMemoryBookingRepository::new();
        repo.create(stay(1)).await?;

        let res = repo
            .update_status(BookingId::new(42), BookingStatus::Completed)
            .await?;
        assert!(res.is_none());

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, BookingStatus::Confirmed);
        Ok(())
    }
}
