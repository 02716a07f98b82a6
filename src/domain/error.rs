use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the store rejected a write because of a uniqueness constraint
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Unknown storage backend 'sqlite'");
        assert_eq!(
            error.to_string(),
            "Configuration error: Unknown storage backend 'sqlite'"
        );
        assert!(!error.is_conflict());
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Email 'a@b.c' already exists");
        assert_eq!(error.to_string(), "Conflict: Email 'a@b.c' already exists");
        assert!(error.is_conflict());
    }

    #[test]
    fn test_storage_error_is_not_conflict() {
        let error = DomainError::storage("connection reset");
        assert_eq!(error.to_string(), "Storage error: connection reset");
        assert!(!error.is_conflict());
    }
}
