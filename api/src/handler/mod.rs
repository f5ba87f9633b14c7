use std::str::FromStr;

use shared::error::{AppError, AppResult};

pub mod booking;
pub mod contact;
pub mod health;
pub mod pms;
pub mod room;

/// Path ids come in as raw strings so a non-numeric value behaves exactly
/// like an id that does not resolve: 404, never a parse crash.
fn parse_path_id<T: FromStr>(raw: &str, not_found: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(not_found.to_string()))
}
