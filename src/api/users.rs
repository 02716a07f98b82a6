//! User registration and lookup endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json};
use crate::domain::User;
use crate::infrastructure::user::CreateUserRequest;

/// Request body for POST /users
///
/// Both fields are optional here so that an incomplete body reaches the
/// service's validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateUserPayload> for CreateUserRequest {
    fn from(payload: CreateUserPayload) -> Self {
        Self {
            username: payload.username,
            email: payload.email,
        }
    }
}

/// Single user as returned by GET /users/{id}
#[derive(Debug, Clone, Serialize)]
pub struct UserDetails {
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// Listing entry as returned by GET /users
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// List users response data
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersData {
    pub users: Vec<UserSummary>,
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    debug!(email = ?payload.email, "Creating user");

    let user = state.user_service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(format!("{} was added!", user.email()))),
    ))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserDetails>>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state.user_service.get(&user_id).await?;

    Ok(Json(ApiResponse::data(UserDetails::from(&user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ListUsersData>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await?;

    Ok(Json(ApiResponse::data(ListUsersData {
        users: users.iter().map(UserSummary::from).collect(),
    })))
}
