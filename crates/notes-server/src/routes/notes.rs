//! Note CRUD routes.
//!
//! Everything is served from the single `/note` path and dispatched by
//! method:
//! - POST /note - Create a note from `{name, text}`
//! - GET /note?id= - Read a note
//! - PUT /note?id= - Replace a note's name and text
//! - DELETE /note?id= - Delete a note
//!
//! Any other method gets a plain-text 405, including HEAD, which would
//! otherwise be answered by the GET handler.

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;

use notes_core::{Note, NoteId};

use crate::error::{ApiError, ApiResult};
use crate::extract::{NoteBody, NoteIdParam};
use crate::state::AppState;

/// Path all note operations are served from.
pub const NOTE_PATH: &str = "/note";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for POST /note.
#[derive(Debug, Serialize)]
pub struct CreateNoteResponse {
    /// The created note's ID.
    pub id: NoteId,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode `body` as a JSON response.
///
/// By the time this runs the store has already been changed; an encoding
/// failure is reported as a 500 but the change stays applied.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> ApiResult<Response> {
    let bytes = serde_json::to_vec(body).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode response body");
        ApiError::Internal("failed to encode".into())
    })?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /note - Create a note.
///
/// # Response
///
/// - 201 Created: `{ "id": "..." }`
/// - 400 Bad Request: Body is not a `{name, text}` object
async fn create_note(
    State(state): State<AppState>,
    NoteBody(content): NoteBody,
) -> ApiResult<Response> {
    let note = Note::create(content);
    let id = note.id;

    state.store().put(note).await?;
    tracing::info!(note_id = %id, "Created note");

    json_response(StatusCode::CREATED, &CreateNoteResponse { id })
}

/// GET /note?id= - Read a note.
///
/// # Response
///
/// - 200 OK: The full note
/// - 400 Bad Request: Missing `id`
/// - 404 Not Found: Unknown `id`
async fn read_note(State(state): State<AppState>, param: NoteIdParam) -> ApiResult<Response> {
    let id = param.resolve()?;
    let note = state.store().get(&id).await?;

    json_response(StatusCode::OK, &note)
}

/// PUT /note?id= - Replace a note's name and text.
///
/// # Response
///
/// - 200 OK: The updated note
/// - 400 Bad Request: Missing `id` or malformed body
/// - 404 Not Found: Unknown `id`
async fn update_note(
    State(state): State<AppState>,
    param: NoteIdParam,
    NoteBody(content): NoteBody,
) -> ApiResult<Response> {
    let id = param.resolve()?;
    let note = state.store().update(&id, content).await?;
    tracing::info!(note_id = %id, "Updated note");

    json_response(StatusCode::OK, &note)
}

/// DELETE /note?id= - Delete a note.
///
/// # Response
///
/// - 204 No Content
/// - 400 Bad Request: Missing `id`
/// - 404 Not Found: Unknown `id`
async fn delete_note(State(state): State<AppState>, param: NoteIdParam) -> ApiResult<StatusCode> {
    let id = param.resolve()?;
    state.store().delete(&id).await?;
    tracing::info!(note_id = %id, "Deleted note");

    Ok(StatusCode::NO_CONTENT)
}

/// Any method on `/note` other than POST, GET, PUT or DELETE.
///
/// Also registered for HEAD explicitly.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        NOTE_PATH,
        post(create_note)
            .get(read_note)
            .put(update_note)
            .delete(delete_note)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
