//! Users Service
//!
//! A small registration and lookup API over a single `users` table:
//! - Health check (`GET /ping`)
//! - User creation with email uniqueness (`POST /users`)
//! - Lookup by id and full listing (`GET /users/{id}`, `GET /users`)
//! - A server-rendered index page with an add-user form (`GET /`, `POST /`)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::storage::{StorageConfig, StorageFactory};
use tracing::info;

/// Create the application state backed by the configured store
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = StorageConfig::from_settings(&config.storage)?;
    let repository = StorageFactory::create_user_repository(&storage_config).await?;

    info!("Application state initialized");

    Ok(AppState::with_repository(repository))
}
