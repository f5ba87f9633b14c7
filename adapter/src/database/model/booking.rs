use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::booking::{Booking, BookingStatus};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub total_amount: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            id,
            first_name,
            last_name,
            email,
            phone,
            room_id,
            check_in,
            check_out,
            guests,
            special_requests,
            total_amount,
            status,
            created_at,
        } = value;
        Booking {
            id: id.into(),
            first_name,
            last_name,
            email,
            phone,
            room_id: room_id.into(),
            check_in,
            check_out,
            guests,
            special_requests,
            total_amount,
            status: BookingStatus::from(status),
            created_at,
        }
    }
}
