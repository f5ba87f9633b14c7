use crate::model::id::UserId;

pub mod event;

/// Site account. No route exercises users yet; the storage contract exists
/// for the administrative tooling. Only a bcrypt hash of the password is
/// ever stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}
