use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::contact::{event::CreateContact, Contact};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Contact>>;
    async fn create(&self, event: CreateContact) -> AppResult<Contact>;
}
