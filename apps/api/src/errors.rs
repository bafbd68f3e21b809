use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::EditError;
use crate::llm_client::LlmError;
use crate::persistence::SnapshotError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Edit(e) => {
                tracing::warn!("Rejected edit: {e}");
                match e {
                    EditError::IndexOutOfRange { .. } | EditError::UnknownEntry { .. } => {
                        (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string())
                    }
                    EditError::UnknownListField(_)
                    | EditError::PhotoMissing
                    | EditError::NoActiveDrag => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
                    }
                }
            }
            AppError::Llm(LlmError::MissingApiKey) => {
                tracing::error!("Text enhancement requested without an API key");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_API_KEY",
                    "Missing GEMINI_API_KEY on server".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Gemini request failed".to_string(),
                )
            }
            AppError::Snapshot(e) => {
                tracing::error!("Snapshot error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SNAPSHOT_ERROR",
                    "The saved CV could not be read or written".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
