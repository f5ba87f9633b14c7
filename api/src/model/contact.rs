use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    contact::{event::CreateContact, Contact},
    id::ContactId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(length(min = 1))]
    pub subject: String,
    #[garde(length(min = 1))]
    pub message: String,
}

impl From<CreateContactRequest> for CreateContact {
    fn from(value: CreateContactRequest) -> Self {
        let CreateContactRequest {
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
        } = value;
        CreateContact {
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        let Contact {
            id,
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
            created_at,
        } = value;
        Self {
            id,
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
