use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, RoomId},
};
use kernel::pricing::Cents;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub check_in: NaiveDate,
    #[garde(skip)]
    pub check_out: NaiveDate,
    #[garde(skip)]
    pub guests: i32,
    #[garde(skip)]
    pub special_requests: Option<String>,
    #[garde(custom(non_negative_decimal))]
    pub total_amount: String,
}

fn non_negative_decimal(value: &str, _context: &()) -> garde::Result {
    value
        .parse::<Cents>()
        .map(|_| ())
        .map_err(|_| garde::Error::new("must be a non-negative decimal amount"))
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
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
        } = value;
        CreateBooking {
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
            status: None,
        }
    }
}

/// Status is optional at the serde level so a missing or empty value can be
/// answered with the route's own 400 rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
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
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
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
        Self {
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
            status: status.to_string(),
            created_at,
        }
    }
}
