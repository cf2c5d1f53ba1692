//! The JSON envelope every response is wrapped in.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: Option<T>,
    pub message: String,
    pub status: String,
    /// Unix seconds.
    pub timestamp: i64,
}

impl<T> Envelope<T> {
    pub fn success(code: StatusCode, data: T) -> Self {
        Self {
            code: code.as_u16(),
            data: Some(data),
            message: String::new(),
            status: STATUS_SUCCESS.to_string(),
            timestamp: now(),
        }
    }
}

impl Envelope<()> {
    pub fn error(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_u16(),
            data: None,
            message: message.into(),
            status: STATUS_ERROR.to_string(),
            timestamp: now(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

fn now() -> i64 {
    jiff::Timestamp::now().as_second()
}
