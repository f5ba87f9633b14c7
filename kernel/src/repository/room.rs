use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RoomId,
    room::{event::CreateRoom, Room},
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Every room in the catalog, in a stable order.
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    /// Rooms whose category equals `room_type` exactly (case-sensitive).
    async fn find_by_type(&self, room_type: &str) -> AppResult<Vec<Room>>;
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
}
