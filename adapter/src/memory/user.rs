use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use super::lock;

pub struct InMemoryUserRepository {
    inner: Mutex<UserStore>,
}

struct UserStore {
    users: BTreeMap<UserId, User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(UserStore {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let store = lock(&self.inner)?;
        Ok(store.users.get(&user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let store = lock(&self.inner)?;
        Ok(store
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;

        let mut store = lock(&self.inner)?;
        let id = UserId::new(store.next_id);
        store.next_id += 1;
        let user = User {
            id,
            username: event.username,
            password_hash,
        };
        store.users.insert(id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_stores_a_hash_not_the_password() -> anyhow::Result<()> {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(CreateUser::new("frontdesk".into(), "hunter2".into()))
            .await?;

        assert_eq!(user.id, UserId::new(1));
        assert_ne!(user.password_hash, "hunter2");
        assert!(bcrypt::verify("hunter2", &user.password_hash)?);

        let by_name = repo.find_by_username("frontdesk").await?;
        assert_eq!(by_name, Some(user.clone()));
        assert!(repo.find_by_username("nobody").await?.is_none());
        assert_eq!(repo.find_by_id(user.id).await?, Some(user));
        Ok(())
    }
}
