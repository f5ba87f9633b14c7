use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::id::RoomId;

pub mod event;

/// A bookable accommodation unit with a fixed nightly rate.
///
/// `price` is kept as a fixed-point decimal string end to end so no
/// floating-point drift is introduced between storage and the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub room_type: RoomType,
    pub description: String,
    pub price: String,
    pub max_occupancy: i32,
    pub size: String,
    pub view: String,
    pub amenities: Vec<String>,
    pub image_url: String,
    pub available: bool,
}

/// Room categories observed in the catalog. The wire value is a free-form
/// string, so anything outside the known set round-trips through `Other`
/// unchanged (matching stays case-sensitive: "Suite" is not `Suite`).
#[derive(
    Debug, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    #[strum(default, to_string = "{0}")]
    Other(String),
}

impl From<String> for RoomType {
    fn from(value: String) -> Self {
        RoomType::from_str(&value).unwrap_or(RoomType::Other(value))
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.to_string()
    }
}
