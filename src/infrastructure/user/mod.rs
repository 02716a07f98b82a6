//! User infrastructure module
//!
//! This module provides the user repositories (PostgreSQL and in-memory) and
//! the user service that validates registrations and enforces email
//! uniqueness on top of them.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
