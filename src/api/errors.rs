use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::InsufficientStock => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Migration(_) | AppError::Config(_) => {
                tracing::error!(error = %self, "request failed");
                return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            }
        };
        json_error(status, self.to_string())
    }
}

/// Missing fields, wrong types, bad JSON and a wrong content type are all
/// reported as validation errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// A path id that is not an integer cannot name any product.
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::NotFound("Product")
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
