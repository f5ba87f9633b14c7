use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::contact::{register_contact, show_contact_list};

pub fn build_contact_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_contact_list).post(register_contact));

    Router::new().nest("/contacts", routers)
}
