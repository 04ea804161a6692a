use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDraft};

/// Repository trait for User persistence
///
/// Implementations enforce email uniqueness (exact, case-sensitive match) and never hand
/// out an id twice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in id order
    async fn list(&self) -> UserResult<Vec<User>>;

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Assigns the next id and both timestamps
    async fn create(&self, draft: UserDraft) -> UserResult<User>;

    /// Overwrites the mutable fields of an existing user
    async fn update(&self, id: i64, draft: UserDraft) -> UserResult<User>;

    /// Returns false when no user had this id
    async fn delete(&self, id: i64) -> UserResult<bool>;

    async fn count(&self) -> UserResult<usize>;
}

#[derive(Debug, Default)]
struct Directory {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Directory {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// The map and the id counter share one lock, so each check-then-write runs atomically.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    directory: Arc<RwLock<Directory>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let directory = self.directory.read().await;
        Ok(directory.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let directory = self.directory.read().await;
        Ok(directory.users.get(&id).cloned())
    }

    async fn create(&self, draft: UserDraft) -> UserResult<User> {
        let mut directory = self.directory.write().await;

        if directory.email_taken(&draft.email, None) {
            return Err(UserError::DuplicateEmail(draft.email));
        }

        directory.last_id += 1;
        let user = User::new(directory.last_id, draft);
        directory.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, id: i64, draft: UserDraft) -> UserResult<User> {
        let mut directory = self.directory.write().await;

        if !directory.users.contains_key(&id) {
            return Err(UserError::NotFound(id));
        }
        if directory.email_taken(&draft.email, Some(id)) {
            return Err(UserError::DuplicateEmail(draft.email));
        }

        let user = directory
            .users
            .get_mut(&id)
            .ok_or(UserError::NotFound(id))?;
        user.apply_draft(draft);

        tracing::info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut directory = self.directory.write().await;

        if directory.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> UserResult<usize> {
        Ok(self.directory.read().await.users.len())
    }
}
