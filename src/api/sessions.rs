use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{AppConfig, PaletteSession, SessionId};
use crate::services::SessionRegistry;

use super::resolve_mode;

/// Full session state as returned by most endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Opaque session token; path parameter for all other endpoints
    pub id: String,
    /// Currently selected harmony mode
    pub mode: String,
    /// The five working colors as "#RRGGBB" strings, in display order
    pub colors: Vec<String>,
    /// Lock mask, index-aligned with `colors`
    pub locked: Vec<bool>,
    /// Number of palettes saved in this session
    pub saved_count: usize,
    /// Session creation time
    pub created_at: DateTime<Utc>,
}

impl SessionResponse {
    pub fn from_session(session: &PaletteSession) -> Self {
        Self {
            id: session.id.to_string(),
            mode: session.mode.to_string(),
            colors: session.palette.colors().iter().map(|c| c.to_string()).collect(),
            locked: session.palette.locked().to_vec(),
            saved_count: session.collection.len(),
            created_at: session.created_at,
        }
    }
}

/// Request body for session creation
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    /// Harmony mode for the initial palette; the configured default when
    /// omitted, `random` when unrecognized
    pub mode: Option<String>,
}

/// Create a new palette session
///
/// A working palette is auto-generated immediately, so the response
/// already carries five colors. Sessions are isolated: nothing created or
/// saved here is visible to any other session.
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, description = "Session created", body = SessionResponse),
    ),
    tag = "Session"
)]
pub async fn handle_create_session<R: SessionRegistry>(
    State(config): State<Arc<AppConfig>>,
    State(registry): State<Arc<R>>,
    body: Option<Json<CreateSessionRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let mode = match request.mode.as_deref() {
        Some(raw) => resolve_mode(raw),
        None => config.default_mode(),
    };

    let session = PaletteSession::new(SessionId::generate(), mode, &mut rand::thread_rng());

    tracing::info!(session_id = %session.id, mode = %session.mode, "Session created");

    let response = SessionResponse::from_session(&session);
    registry.insert(session).await?;

    Ok(Json(response))
}

/// Fetch the current state of a session
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    responses(
        (status = 200, description = "Current session state", body = SessionResponse),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Session"
)]
pub async fn handle_get_session<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = registry
        .find(&SessionId::new(id))
        .await?
        .ok_or(ApiError::SessionNotFound)?;

    Ok(Json(SessionResponse::from_session(&session)))
}

/// Response from session deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteSessionResponse {
    /// Whether a session was actually removed
    pub deleted: bool,
}

/// End a session and drop its state
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    responses(
        (status = 200, description = "Deletion result", body = DeleteSessionResponse),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Session"
)]
pub async fn handle_delete_session<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionId::new(id);
    let deleted = registry.remove(&id).await?;

    if deleted {
        tracing::info!(session_id = %id, "Session removed");
    }

    Ok(Json(DeleteSessionResponse { deleted }))
}
