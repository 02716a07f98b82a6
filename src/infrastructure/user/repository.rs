//! In-memory user repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    /// Users in insertion order
    users: Vec<User>,
    /// Index for email -> position in `users`
    email_index: HashMap<String, usize>,
    next_id: i64,
}

/// In-memory implementation of UserRepository
///
/// The duplicate check and the insert run under a single write lock, which
/// plays the role of the store's unique constraint.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .email_index
            .get(email)
            .and_then(|&pos| inner.users.get(pos))
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;

        if inner.email_index.contains_key(user.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email()
            )));
        }

        inner.next_id += 1;
        let id = UserId::new(inner.next_id);
        let created = User::from_new(id, user, Utc::now());

        let pos = inner.users.len();
        inner.email_index.insert(created.email().to_string(), pos);
        inner.users.push(created.clone());

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.clone())
    }
}
