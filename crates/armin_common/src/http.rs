// --- File: crates/armin_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{ArminError, HttpStatusCode};

// Include the client module
pub mod client;

/// Extension trait for ArminError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for ArminError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut error = json!({
            "message": self.to_string(),
            "code": status_code.as_u16(),
        });
        if !self.details().is_empty() {
            error["details"] = json!(self.details());
        }

        (status_code, Json(json!({ "error": error }))).into_response()
    }
}

/// Implement IntoResponse for ArminError to make it easier to use in Axum handlers.
impl IntoResponse for ArminError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
