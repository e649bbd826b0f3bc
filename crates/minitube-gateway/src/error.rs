use crate::model::ErrorResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use minitube_core::StoreError;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

/// The API operation a failure happened in. Picks the generic message
/// clients see for 5xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListVideos,
    GetVideo,
    CreateVideo,
    UpdateVideo,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::ListVideos => "Error fetching videos",
            Operation::GetVideo => "Error fetching video",
            Operation::CreateVideo => "Error creating video",
            Operation::UpdateVideo => "Error updating video",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::ListVideos => write!(f, "list videos"),
            Operation::GetVideo => write!(f, "get video"),
            Operation::CreateVideo => write!(f, "create video"),
            Operation::UpdateVideo => write!(f, "update video"),
        }
    }
}

/// A store failure tagged with the operation it interrupted.
///
/// `NotFound` maps to 404. Validation failures (including request bodies
/// that do not deserialize) and storage failures both map to 500 with the
/// operation's generic message; the `code` field of the body tells them
/// apart.
#[derive(Debug, Error)]
#[error("{operation} failed: {source}")]
pub struct AppError {
    operation: Operation,
    #[source]
    source: StoreError,
}

impl AppError {
    pub fn new(operation: Operation, source: StoreError) -> Self {
        Self { operation, source }
    }

    /// Adapter for `map_err` that tags errors with `operation`.
    pub fn during(operation: Operation) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::new(operation, source)
    }

    /// Adapter for `map_err` that reports an unreadable request body as a
    /// validation failure of `operation`.
    pub fn rejected(operation: Operation) -> impl FnOnce(JsonRejection) -> AppError {
        move |rejection| {
            AppError::new(operation, StoreError::Validation(rejection.body_text()))
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.source {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Validation(_) | StoreError::StorageUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (message, code) = match &self.source {
            StoreError::NotFound(_) => ("Video not found", "NOT_FOUND"),
            StoreError::Validation(reason) => {
                warn!(operation = %self.operation, reason = %reason, "rejected invalid video");
                (self.operation.failure_message(), "VALIDATION_ERROR")
            }
            StoreError::StorageUnavailable(reason) => {
                error!(operation = %self.operation, reason = %reason, "storage failure");
                (self.operation.failure_message(), "STORAGE_UNAVAILABLE")
            }
        };

        let body = ErrorResponse {
            message: message.to_string(),
            code: code.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
