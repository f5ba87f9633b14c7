use axum::{
    extract::{Path, Query, State},
    Json,
};
use kernel::model::id::RoomId;
use kernel::pricing::{self, Cents, DEFAULT_TAX_RATE_BPS};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::room::{QuoteQuery, QuoteResponse, RoomResponse};

use super::parse_path_id;

pub async fn show_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(|rooms| rooms.into_iter().map(RoomResponse::from).collect())
        .map(Json)
}

pub async fn show_rooms_by_type(
    Path(room_type): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .room_repository()
        .find_by_type(&room_type)
        .await
        .map(|rooms| rooms.into_iter().map(RoomResponse::from).collect())
        .map(Json)
}

pub async fn show_room(
    Path(room_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    let room_id: RoomId = parse_path_id(&room_id, "Room not found")?;
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("Room not found".into())),
        })
}

/// Server-side price derivation for a stay, so the browser never has to
/// re-implement the formula.
pub async fn quote_stay(
    Path(room_id): Path<String>,
    Query(query): Query<QuoteQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<QuoteResponse>> {
    let room_id: RoomId = parse_path_id(&room_id, "Room not found")?;
    let room = registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;

    let nights = pricing::nights(query.check_in, query.check_out);
    if nights <= 0 {
        return Err(AppError::InvalidRequest(
            "Check-out must be after check-in".into(),
        ));
    }

    // The catalog invariant guarantees the rate parses; a violation here is
    // a storage defect, not a client error.
    let rate: Cents = room
        .price
        .parse()
        .map_err(|_| AppError::ConversionEntityError(format!("bad room rate: {}", room.price)))?;

    let quote = pricing::quote(rate, nights, DEFAULT_TAX_RATE_BPS);
    Ok(Json(QuoteResponse::new(nights, quote)))
}
