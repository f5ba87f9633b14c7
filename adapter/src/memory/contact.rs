use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use kernel::model::{
    contact::{event::CreateContact, Contact},
    id::ContactId,
};
use kernel::repository::contact::ContactRepository;
use shared::error::AppResult;

use super::lock;

pub struct InMemoryContactRepository {
    inner: Mutex<ContactStore>,
}

struct ContactStore {
    contacts: BTreeMap<ContactId, Contact>,
    next_id: i64,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ContactStore {
                contacts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> AppResult<Vec<Contact>> {
        let store = lock(&self.inner)?;
        Ok(store.contacts.values().cloned().collect())
    }

    async fn create(&self, event: CreateContact) -> AppResult<Contact> {
        let mut store = lock(&self.inner)?;
        let id = ContactId::new(store.next_id);
        store.next_id += 1;
        let contact = Contact {
            id,
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            phone: event.phone,
            subject: event.subject,
            message: event.message,
            created_at: Utc::now(),
        };
        store.contacts.insert(id, contact.clone());
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_defaults_phone_and_sets_created_at() -> anyhow::Result<()> {
        let repo = InMemoryContactRepository::new();
        let before = Utc::now();

        let contact = repo
            .create(CreateContact::new(
                "John".into(),
                "Smith".into(),
                "john.smith@example.com".into(),
                None,
                "Late arrival".into(),
                "We land around midnight, is check-in still possible?".into(),
            ))
            .await?;

        assert_eq!(contact.id, ContactId::new(1));
        assert!(contact.phone.is_none());
        assert!(contact.created_at >= before);
        Ok(())
    }

    #[tokio::test]
    async fn contacts_list_in_insertion_order() -> anyhow::Result<()> {
        let repo = InMemoryContactRepository::new();
        for subject in ["First", "Second", "Third"] {
            repo.create(CreateContact::new(
                "Ana".into(),
                "Lopez".into(),
                "ana@example.com".into(),
                Some("555-0199".into()),
                subject.into(),
                "Hello".into(),
            ))
            .await?;
        }

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(all[2].subject, "Third");
        Ok(())
    }
}
