use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus},
    id::BookingId,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

const BOOKING_COLUMNS: &str = r#"
    id, first_name, last_name, email, phone, room_id,
    check_in, check_out, guests, special_requests,
    total_amount, status, created_at
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY id"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let status = event.status.unwrap_or(BookingStatus::Confirmed);
        let row: BookingRow = sqlx::query_as(&format!(
            r#"
                INSERT INTO bookings
                    (first_name, last_name, email, phone, room_id,
                     check_in, check_out, guests, special_requests,
                     total_amount, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now())
                RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(event.room_id.raw())
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(event.guests)
        .bind(&event.special_requests)
        .bind(&event.total_amount)
        .bind(status.to_string())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Booking::from(row))
    }

    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            r#"
                UPDATE bookings
                SET status = $2
                WHERE id = $1
                RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking_id.raw())
        .bind(status.to_string())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }
}
