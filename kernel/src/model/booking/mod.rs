use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::id::{BookingId, RoomId};

pub mod event;

/// A guest's reservation of one room for a date range.
///
/// `room_id` is a soft link: it is existence-checked when the booking is
/// created but never enforced afterwards. Bookings are never deleted; the
/// only mutation is status replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
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
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking lifecycle values observed in the wild. There is no state machine:
/// the status-update path accepts any non-empty string, and unknown values
/// are carried through `Other` verbatim.
#[derive(
    Debug, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
    #[strum(default, to_string = "{0}")]
    Other(String),
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        BookingStatus::from_str(&value).unwrap_or(BookingStatus::Other(value))
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        value.to_string()
    }
}
