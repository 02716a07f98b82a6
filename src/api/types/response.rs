//! Response envelope shared by every JSON endpoint
//!
//! Bodies look like `{"status": "success", "message": ...}`,
//! `{"status": "success", "data": ...}` or `{"status": "fail", "message": ...}`.

use serde::{Deserialize, Serialize};

/// Outcome marker carried in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// Success carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure carrying a message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Success carrying a data payload
    pub fn data(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_envelope() {
        let body = serde_json::to_value(ApiResponse::message("pong!")).unwrap();
        assert_eq!(body, json!({"status": "success", "message": "pong!"}));
    }

    #[test]
    fn test_fail_envelope() {
        let body = serde_json::to_value(ApiResponse::fail("Invalid payload.")).unwrap();
        assert_eq!(body, json!({"status": "fail", "message": "Invalid payload."}));
    }

    #[test]
    fn test_data_envelope() {
        let body = serde_json::to_value(ApiResponse::data(json!({"users": []}))).unwrap();
        assert_eq!(body, json!({"status": "success", "data": {"users": []}}));
    }
}
