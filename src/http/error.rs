//! HTTP error mapping for the todo API.
//!
//! Every client-visible failure renders the same body shape:
//! `{"error": {"message": ..., "field": ...}}` with `field` omitted when no
//! single input field is at fault. Internal detail never leaves the server;
//! it is logged and replaced with a generic message.

use crate::todo::services::TodoServiceError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Wire shape of an error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Error detail payload.
    pub error: ErrorDetail,
}

/// Message and optional offending field of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Client-visible message.
    pub message: String,
    /// Name of the offending input field, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl ErrorBody {
    /// Builds a field-less error body.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                field: None,
            },
        }
    }
}

/// Client-visible API failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-correctable input failure; maps to 400.
    #[error("{message}")]
    InvalidInput {
        /// Offending input field, when applicable.
        field: Option<&'static str>,
        /// Client-visible message.
        message: String,
    },

    /// The addressed todo does not exist; maps to 404.
    #[error("Todo not found")]
    NotFound,

    /// Unexpected failure; maps to 500 with the detail kept server-side.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn body(&self) -> ErrorBody {
        match self {
            Self::InvalidInput { field, message } => ErrorBody {
                error: ErrorDetail {
                    message: message.clone(),
                    field: *field,
                },
            },
            Self::NotFound | Self::Internal => ErrorBody::from_message(self.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::Validation(validation) => {
                tracing::warn!(
                    field = validation.field(),
                    message = %validation,
                    "rejected invalid input"
                );
                Self::InvalidInput {
                    field: Some(validation.field()),
                    message: validation.to_string(),
                }
            }
            TodoServiceError::NotFound => {
                tracing::warn!("todo not found");
                Self::NotFound
            }
            TodoServiceError::Repository(source) => {
                tracing::error!(error = %source, "todo repository failure");
                Self::Internal
            }
        }
    }
}
