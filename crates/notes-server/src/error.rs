//! API error types with plain-text responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Method not allowed (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Bad request (400): missing parameter or malformed body.
    #[error("{0}")]
    BadRequest(String),

    /// The request body did not arrive within the read timeout (408).
    #[error("{0}")]
    RequestTimeout(String),

    /// The request body exceeds the body size limit (413).
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error.
    #[error(transparent)]
    Store(#[from] notes_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::RequestTimeout(_) => "REQUEST_TIMEOUT",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(notes_store::StoreError::NoteNotFound(_)) => "NOT_FOUND",
            Self::Store(notes_store::StoreError::DuplicateNote(_)) => "CONFLICT",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                notes_store::StoreError::NoteNotFound(_) => StatusCode::NOT_FOUND,
                notes_store::StoreError::DuplicateNote(_) => StatusCode::CONFLICT,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::warn!(code = self.code(), error = %self, "Request rejected");
        }

        // A &str/String body is sent as text/plain; charset=utf-8.
        (status, self.to_string()).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
