use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{register_booking, show_booking_list, update_booking_status};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_booking_list).post(register_booking))
        .route("/:booking_id/status", patch(update_booking_status));

    Router::new().nest("/bookings", routers)
}
