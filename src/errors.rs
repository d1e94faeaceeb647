use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("past bookings cannot be cancelled")]
    PastBooking,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PastBooking => StatusCode::CONFLICT,
        };

        // Field-level errors keep their structure so the form can render
        // inline feedback next to each offending input.
        let body = match self {
            AppError::Validation(errors) => serde_json::json!({ "errors": errors }),
            AppError::Upstream(message) => serde_json::json!({ "error": message }),
            other => serde_json::json!({ "error": other.to_string() }),
        };

        (status, axum::Json(body)).into_response()
    }
}
