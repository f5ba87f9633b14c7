use chrono::NaiveDate;
use kernel::model::{id::RoomId, room::Room};
use kernel::pricing::Quote;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    /// Wire name kept from the original schema.
    #[serde(rename = "type")]
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

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
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
        Self {
            id,
            name,
            room_type: room_type.to_string(),
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub nights: i64,
    pub subtotal: f64,
    pub taxes: f64,
    pub total: f64,
}

impl QuoteResponse {
    pub fn new(nights: i64, quote: Quote) -> Self {
        Self {
            nights,
            subtotal: quote.subtotal.to_f64(),
            taxes: quote.taxes.to_f64(),
            total: quote.total.to_f64(),
        }
    }
}
