//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserError, UserRepository};
use crate::infrastructure::user::{CreateUserRequest, InMemoryUserRepository, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }

    /// State backed by the given repository
    pub fn with_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserService::new(repository)))
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()))
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, UserError>;
    async fn get(&self, id: &str) -> Result<User, UserError>;
    async fn list(&self) -> Result<Vec<User>, UserError>;
}

#[async_trait::async_trait]
impl<R> UserServiceTrait for UserService<R>
where
    R: UserRepository + ?Sized + 'static,
{
    async fn create(&self, request: CreateUserRequest) -> Result<User, UserError> {
        UserService::create(self, request).await
    }

    async fn get(&self, id: &str) -> Result<User, UserError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        UserService::list(self).await
    }
}
