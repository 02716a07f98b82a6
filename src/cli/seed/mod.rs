//! Seed command - inserts sample users into the configured store

use tracing::{info, warn};

use crate::api::state::UserServiceTrait;
use crate::domain::UserError;
use crate::infrastructure::user::CreateUserRequest;

const SAMPLE_USERS: &[(&str, &str)] = &[
    ("michael", "michael@mherman.org"),
    ("michaelherman", "michael@realpython.com"),
];

/// Run the seed command
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let state = crate::create_app_state_with_config(&config).await?;
    let added = seed_users(state.user_service.as_ref()).await?;

    info!(added, "Seeding complete");

    Ok(())
}

/// Inserts the sample users, skipping emails that are already registered
///
/// Returns how many users were added.
pub async fn seed_users(service: &dyn UserServiceTrait) -> Result<usize, UserError> {
    let mut added = 0;

    for (username, email) in SAMPLE_USERS {
        match service.create(CreateUserRequest::new(*username, *email)).await {
            Ok(user) => {
                info!(user_id = %user.id(), email = %user.email(), "Seeded user");
                added += 1;
            }
            Err(UserError::DuplicateEmail) => {
                warn!(email = %email, "Sample user already exists, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(added)
}
