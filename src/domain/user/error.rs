//! Failures surfaced by user operations

use thiserror::Error;

use super::validation::UserValidationError;
use crate::domain::DomainError;

/// Outcome of a failed user operation
///
/// Every variant except `Storage` is a client error whose display text is the
/// message returned to the caller.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid payload.")]
    InvalidPayload,

    #[error("Sorry. That email already exists.")]
    DuplicateEmail,

    #[error("User format is not valid")]
    MalformedIdentifier,

    #[error("User does not exist")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl From<UserValidationError> for UserError {
    fn from(_: UserValidationError) -> Self {
        Self::InvalidPayload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages() {
        assert_eq!(UserError::InvalidPayload.to_string(), "Invalid payload.");
        assert_eq!(
            UserError::DuplicateEmail.to_string(),
            "Sorry. That email already exists."
        );
        assert_eq!(
            UserError::MalformedIdentifier.to_string(),
            "User format is not valid"
        );
        assert_eq!(UserError::NotFound.to_string(), "User does not exist");
    }

    #[test]
    fn test_validation_error_becomes_invalid_payload() {
        let err: UserError = UserValidationError::EmptyEmail.into();
        assert!(matches!(err, UserError::InvalidPayload));
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: UserError = DomainError::storage("pool timed out").into();
        assert_eq!(err.to_string(), "Storage error: pool timed out");
    }
}
