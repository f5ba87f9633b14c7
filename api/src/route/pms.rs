use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::pms::pms_status;

pub fn build_pms_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/status", get(pms_status));

    Router::new().nest("/pms", routers)
}
