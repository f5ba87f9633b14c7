use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived read-only report; the "connected" flag is cosmetic and no
/// external property-management system is contacted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PmsStatusResponse {
    pub status: &'static str,
    pub last_sync: DateTime<Utc>,
    pub available_rooms: usize,
    pub total_bookings: usize,
}
