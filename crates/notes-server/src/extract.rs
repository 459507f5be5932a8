//! Request extractors for the note handlers.
//!
//! Both extractors reject with [`ApiError::BadRequest`], so a missing `id`
//! or an undecodable body is always a 400 regardless of which handler runs.
//! A body that arrives too slowly (408) or is too large (413) keeps its own
//! status.

use std::error::Error as _;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request, rejection::BytesRejection},
    http::{StatusCode, request::Parts},
};
use notes_core::{NoteContent, NoteId};
use notes_store::StoreError;
use tower_http::timeout::TimeoutError;

use crate::error::ApiError;

/// The `id` query parameter, as sent by the client.
///
/// Only presence is checked here. An empty value counts as missing. If the
/// parameter appears more than once the first occurrence wins.
#[derive(Debug, Clone)]
pub struct NoteIdParam(pub String);

impl NoteIdParam {
    /// Resolve the raw parameter to a note id.
    ///
    /// A value that is not a well-formed id cannot name any stored note, so
    /// it is reported as not found rather than as a bad request.
    pub fn resolve(&self) -> Result<NoteId, StoreError> {
        self.0
            .parse()
            .map_err(|_| StoreError::NoteNotFound(self.0.clone()))
    }
}

impl<S> FromRequestParts<S> for NoteIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
            .map_err(|e| ApiError::BadRequest(format!("invalid query string: {e}")))?;

        pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
            .map(NoteIdParam)
            .ok_or_else(|| ApiError::BadRequest("missing id parameter".into()))
    }
}

/// A JSON `{name, text}` request body.
///
/// The body is decoded whatever its declared `Content-Type`.
#[derive(Debug, Clone)]
pub struct NoteBody(pub NoteContent);

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        serde_json::from_slice(&bytes)
            .map(NoteBody)
            .map_err(|e| ApiError::BadRequest(format!("failed to unmarshal: {e}")))
    }
}

/// Map a failure to buffer the body onto the matching API error.
fn body_rejection(rejection: BytesRejection) -> ApiError {
    let message = format!("failed to read body: {}", rejection.body_text());

    let mut source = rejection.source();
    while let Some(err) = source {
        if err.is::<TimeoutError>() {
            return ApiError::RequestTimeout(message);
        }
        source = err.source();
    }

    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(message),
        _ => ApiError::BadRequest(message),
    }
}
