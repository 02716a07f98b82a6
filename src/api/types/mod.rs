//! Request/response types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod response;

pub use error::ApiError;
pub use json::Json;
pub use response::{ApiResponse, ResponseStatus};
