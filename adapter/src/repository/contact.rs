use async_trait::async_trait;
use derive_new::new;
use kernel::model::contact::{event::CreateContact, Contact};
use kernel::repository::contact::ContactRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::contact::ContactRow, ConnectionPool};

#[derive(new)]
pub struct ContactRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ContactRepository for ContactRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Contact>> {
        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"
                SELECT
                    id, first_name, last_name, email, phone,
                    subject, message, created_at
                FROM contacts
                ORDER BY id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn create(&self, event: CreateContact) -> AppResult<Contact> {
        let row: ContactRow = sqlx::query_as(
            r#"
                INSERT INTO contacts
                    (first_name, last_name, email, phone, subject, message, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, now())
                RETURNING
                    id, first_name, last_name, email, phone,
                    subject, message, created_at
            "#,
        )
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(&event.subject)
        .bind(&event.message)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Contact::from(row))
    }
}
