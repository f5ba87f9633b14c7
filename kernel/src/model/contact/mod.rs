use chrono::{DateTime, Utc};

use crate::model::id::ContactId;

pub mod event;

/// A free-form inquiry submitted independently of any booking.
/// Insert-only: contacts are listed in bulk but never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
