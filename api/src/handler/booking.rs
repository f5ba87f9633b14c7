use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{booking::BookingStatus, id::BookingId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::Payload;
use crate::model::booking::{
    BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};

use super::parse_path_id;

/// Two-phase check, in this order: the payload shape short-circuits first,
/// and only then is the referenced room resolved. A missing room is 404 and
/// nothing is written, so an orphaned booking can never exist.
pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Payload(req): Payload<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let room = registry
        .room_repository()
        .find_by_id(req.room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;

    tracing::info!(room = %room.name, "processing booking");
    let booking = registry.booking_repository().create(req.into()).await?;
    tracing::info!(booking_id = %booking.id, "booking confirmed");

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

pub async fn show_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(|bookings| bookings.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn update_booking_status(
    Path(booking_id): Path<String>,
    State(registry): State<AppRegistry>,
    Payload(req): Payload<UpdateBookingStatusRequest>,
) -> AppResult<Json<BookingResponse>> {
    let status = req
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Status is required".into()))?;

    let booking_id: BookingId = parse_path_id(&booking_id, "Booking not found")?;
    registry
        .booking_repository()
        .update_status(booking_id, BookingStatus::from(status))
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound("Booking not found".into())),
        })
}
