use chrono::NaiveDate;
use derive_new::new;

use crate::model::{booking::BookingStatus, id::RoomId};

#[derive(Debug, Clone, new)]
pub struct CreateBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub total_amount: String,
    /// Defaults to `Confirmed` when omitted.
    pub status: Option<BookingStatus>,
}
