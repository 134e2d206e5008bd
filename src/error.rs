// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorResponse, services::completion::CompletionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidPayload(#[from] JsonRejection),

    #[error("{context} error: {source}")]
    Completion {
        context: &'static str,
        #[source]
        source: CompletionError,
    },
}

impl AppError {
    /// Wrap a provider failure with the name of the feature that called it.
    pub fn completion(context: &'static str) -> impl FnOnce(CompletionError) -> Self {
        move |source| AppError::Completion { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidPayload(rejection) => rejection.status(),
            AppError::Completion { .. } => {
                tracing::error!(error = %self, "completion call failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = match self {
            AppError::InvalidPayload(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
