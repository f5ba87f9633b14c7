use chrono::{DateTime, Utc};
use kernel::model::contact::Contact;

#[derive(sqlx::FromRow)]
pub struct ContactRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(value: ContactRow) -> Self {
        let ContactRow {
            id,
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
            created_at,
        } = value;
        Contact {
            id: id.into(),
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
            created_at,
        }
    }
}
