use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::room::{quote_stay, show_room, show_room_list, show_rooms_by_type};

pub fn build_room_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_room_list))
        .route("/type/:room_type", get(show_rooms_by_type))
        .route("/:room_id", get(show_room))
        .route("/:room_id/quote", get(quote_stay));

    Router::new().nest("/rooms", routers)
}
