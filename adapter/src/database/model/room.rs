use kernel::model::room::{Room, RoomType};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: i64,
    pub name: String,
    pub room_type: String,
    pub description: String,
    pub price: String,
    pub max_occupancy: i32,
    pub size: String,
    pub view: String,
    pub amenities: Vec<String>,
    pub image_url: String,
    pub available: bool,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            room_type,
            description,
            price,
            max_occupancy,
            size,
            view,
            amenities,
            image_url,
            available,
        } = value;
        Room {
            id: id.into(),
            name,
            room_type: RoomType::from(room_type),
            description,
            price,
            max_occupancy,
            size,
            view,
            amenities,
            image_url,
            available,
        }
    }
}
