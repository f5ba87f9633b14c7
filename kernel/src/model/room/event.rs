use derive_new::new;

use crate::model::room::RoomType;

#[derive(Debug, Clone, new)]
pub struct CreateRoom {
    pub name: String,
    pub room_type: RoomType,
    pub description: String,
    pub price: String,
    pub max_occupancy: i32,
    pub size: String,
    pub view: String,
    pub amenities: Vec<String>,
    pub image_url: String,
    /// Defaults to `true` when omitted.
    pub available: Option<bool>,
}
