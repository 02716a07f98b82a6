//! Server-rendered index page with an add-user form

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{User, UserError};
use crate::infrastructure::user::CreateUserRequest;

/// Form body for POST /
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddUserForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<AddUserForm> for CreateUserRequest {
    fn from(form: AddUserForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
        }
    }
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    match state.user_service.list().await {
        Ok(users) => Html(render_index(&users, None)).into_response(),
        Err(e) => failure_page(&state, e).await,
    }
}

/// POST /
///
/// Same validation as POST /users; success redirects back to the listing.
pub async fn add_user(
    State(state): State<AppState>,
    form: Result<Form<AddUserForm>, FormRejection>,
) -> Response {
    let request = match form {
        Ok(Form(form)) => CreateUserRequest::from(form),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Rejected add-user form");
            return failure_page(&state, UserError::InvalidPayload).await;
        }
    };

    match state.user_service.create(request).await {
        Ok(user) => {
            debug!(user_id = %user.id(), "User added from index form");
            Redirect::to("/").into_response()
        }
        Err(e) => failure_page(&state, e).await,
    }
}

/// Re-renders the listing with the failure message
async fn failure_page(state: &AppState, err: UserError) -> Response {
    let ApiError { status, message } = ApiError::from(err);

    match state.user_service.list().await {
        Ok(users) => (status, Html(render_index(&users, Some(&message)))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list users for index page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_index(&[], Some("Internal server error."))),
            )
                .into_response()
        }
    }
}

/// Renders the full index document
pub fn render_index(users: &[User], flash: Option<&str>) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Users</title>
</head>
<body>
  <main>
    <h1>All Users</h1>
"#,
    );

    if let Some(message) = flash {
        html.push_str(&format!(
            "    <p class=\"flash\">{}</p>\n",
            escape_html(message)
        ));
    }

    html.push_str(
        r#"    <form action="/" method="POST">
      <input name="username" type="text" placeholder="Enter a username" required>
      <input name="email" type="email" placeholder="Enter an email address" required>
      <input type="submit" value="Submit">
    </form>
    <hr>
"#,
    );

    if users.is_empty() {
        html.push_str("    <p>No users!</p>\n");
    } else {
        html.push_str("    <ul>\n");
        for user in users {
            html.push_str(&format!(
                "      <li><strong>{}</strong></li>\n",
                escape_html(user.username())
            ));
        }
        html.push_str("    </ul>\n");
    }

    html.push_str("  </main>\n</body>\n</html>\n");
    html
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use chrono::Utc;

    fn user(id: i64, username: &str) -> User {
        User::from_parts(UserId::new(id), username, format!("{}@x.org", username), Utc::now())
    }

    #[test]
    fn test_render_empty_listing() {
        let html = render_index(&[], None);

        assert!(html.contains("<h1>All Users</h1>"));
        assert!(html.contains("<p>No users!</p>"));
        assert!(!html.contains("<ul>"));
        assert!(!html.contains("class=\"flash\""));
    }

    #[test]
    fn test_render_users_in_order() {
        let html = render_index(&[user(1, "michael"), user(2, "fletcher")], None);

        let first = html.find("<li><strong>michael</strong></li>").unwrap();
        let second = html.find("<li><strong>fletcher</strong></li>").unwrap();
        assert!(first < second);
        assert!(!html.contains("No users!"));
    }

    #[test]
    fn test_render_flash_message() {
        let html = render_index(&[], Some("Sorry. That email already exists."));
        assert!(html.contains("<p class=\"flash\">Sorry. That email already exists.</p>"));
    }

    #[test]
    fn test_usernames_are_escaped() {
        let html = render_index(&[user(1, "<script>alert('x')</script>")], None);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    }

    #[test]
    fn test_escape_html_ampersand() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
