//! JSON extractor that reports every rejection as an invalid payload

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;

/// Custom JSON extractor
///
/// Wraps `axum::Json` so that a missing body, a wrong content type, broken
/// JSON or a body of the wrong shape all produce the same
/// `400 {"status": "fail", "message": "Invalid payload."}` response.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => {
                debug!(reason = %describe_rejection(&rejection), "Rejected JSON payload");
                Err(ApiError::invalid_payload())
            }
        }
    }
}

/// Human-readable cause, for logs only
fn describe_rejection(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("invalid JSON syntax: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => "missing JSON content type".to_string(),
        JsonRejection::BytesRejection(err) => format!("unreadable body: {}", err.body_text()),
        other => other.body_text(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        username: Option<String>,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_object() {
        let Json(payload) = Json::<Payload>::from_request(json_request(r#"{"username":"michael"}"#), &())
            .await
            .unwrap();

        assert_eq!(payload.username.as_deref(), Some("michael"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_invalid_payload() {
        let err = Json::<Payload>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid payload.");
    }

    #[tokio::test]
    async fn test_non_object_is_invalid_payload() {
        let err = Json::<Payload>::from_request(json_request("[1, 2]"), &())
            .await
            .unwrap_err();

        assert_eq!(err.message, "Invalid payload.");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid_payload() {
        let req = Request::builder()
            .method("POST")
            .body(Body::from(r#"{"username":"michael"}"#))
            .unwrap();

        let err = Json::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
