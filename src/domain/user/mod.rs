//! User domain
//!
//! This module provides domain types and traits for user registration and
//! lookup, including the user entity, input validation, the error taxonomy
//! surfaced to clients, and the repository trait.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId};
pub use error::UserError;
pub use repository::UserRepository;
pub use validation::{validate_email, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
