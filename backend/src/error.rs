use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use smartpos_shared::{ContactResponse, ValidationFailure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Notification delivery failed: {0:#}")]
    Notification(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::invalid(&failure)),
            )
                .into_response(),
            other => {
                // detail stays in the logs, the caller gets the generic message
                tracing::error!("Contact form error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ContactResponse::failed()),
                )
                    .into_response()
            }
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
