//! User service for registration and lookup

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::{NewUser, User, UserError, UserId, UserRepository};

/// Request for creating a new user
///
/// Fields are optional because they come straight from client input; a
/// missing field is reported as an invalid payload.
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
        }
    }
}

/// User service for registration and lookup
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new user
    ///
    /// The email lookup only short-circuits the common duplicate case. A
    /// uniqueness violation reported by the store at insert time means a
    /// concurrent request registered the same email first.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let (Some(username), Some(email)) = (request.username, request.email) else {
            return Err(UserError::InvalidPayload);
        };

        let new_user = NewUser::new(username, email)?;

        if self.repository.email_exists(new_user.email()).await? {
            debug!(email = %new_user.email(), "Rejecting duplicate email");
            return Err(UserError::DuplicateEmail);
        }

        match self.repository.create(new_user).await {
            Ok(user) => {
                info!(user_id = %user.id(), email = %user.email(), "User registered");
                Ok(user)
            }
            Err(e) if e.is_conflict() => {
                warn!(error = %e, "Insert lost a uniqueness race");
                Err(UserError::InvalidPayload)
            }
            Err(e) => Err(UserError::Storage(e)),
        }
    }

    /// Get a user by the identifier taken from a request path
    pub async fn get(&self, id: &str) -> Result<User, UserError> {
        let user_id: UserId = id.parse()?;

        self.repository
            .get(user_id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// List all users in creation order
    pub async fn list(&self) -> Result<Vec<User>, UserError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let user = service
            .create(CreateUserRequest::new("michael", "michael@realpython.com"))
            .await
            .unwrap();

        assert_eq!(user.username(), "michael");
        assert_eq!(user.email(), "michael@realpython.com");
    }

    #[tokio::test]
    async fn test_create_user_empty_request() {
        let service = create_service();

        let result = service.create(CreateUserRequest::default()).await;
        assert!(matches!(result, Err(UserError::InvalidPayload)));
    }

    #[tokio::test]
    async fn test_create_user_without_username() {
        let service = create_service();

        let request = CreateUserRequest {
            username: None,
            email: Some("marcio.souza@mms.com".to_string()),
        };

        let result = service.create(request).await;
        assert!(matches!(result, Err(UserError::InvalidPayload)));
    }

    #[tokio::test]
    async fn test_create_user_blank_email() {
        let service = create_service();

        let result = service.create(CreateUserRequest::new("michael", "  ")).await;
        assert!(matches!(result, Err(UserError::InvalidPayload)));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let service = create_service();

        service
            .create(CreateUserRequest::new("michael", "michael@realpython.com"))
            .await
            .unwrap();

        let result = service
            .create(CreateUserRequest::new("michael", "michael@realpython.com"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail)));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_user_lost_race_is_invalid_payload() {
        let repository = Arc::new(MockUserRepository::new());
        repository.set_conflict_on_create(true).await;
        let service = UserService::new(repository.clone());

        let result = service
            .create(CreateUserRequest::new("michael", "michael@realpython.com"))
            .await;

        assert!(matches!(result, Err(UserError::InvalidPayload)));
        assert_eq!(repository.len().await, 0);
    }

    #[tokio::test]
    async fn test_create_user_storage_failure() {
        let repository = Arc::new(MockUserRepository::new());
        repository.set_should_fail(true).await;
        let service = UserService::new(repository);

        let result = service
            .create(CreateUserRequest::new("michael", "michael@realpython.com"))
            .await;

        assert!(matches!(result, Err(UserError::Storage(_))));
    }

    #[tokio::test]
    async fn test_get_user() {
        let service = create_service();
        let created = service
            .create(CreateUserRequest::new("michael", "michael@realpython.com"))
            .await
            .unwrap();

        let user = service.get(&created.id().to_string()).await.unwrap();
        assert_eq!(user, created);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let service = create_service();

        let result = service.get("999").await;
        assert!(matches!(result, Err(UserError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_user_malformed_id() {
        let service = create_service();

        let result = service.get("it_is_not_an_id").await;
        assert!(matches!(result, Err(UserError::MalformedIdentifier)));
    }

    #[tokio::test]
    async fn test_list_users() {
        let service = create_service();

        service
            .create(CreateUserRequest::new("michael", "michael@mherman.org"))
            .await
            .unwrap();
        service
            .create(CreateUserRequest::new("fletcher", "fletcher@notreal.com"))
            .await
            .unwrap();

        let users = service.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username(), "michael");
        assert_eq!(users[1].username(), "fletcher");
    }

    #[tokio::test]
    async fn test_service_over_trait_object() {
        let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repository);

        assert!(service.list().await.unwrap().is_empty());
    }
}
