use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::SessionId;
use crate::services::SessionRegistry;

use super::resolve_mode;
use super::sessions::SessionResponse;

/// Request body for palette regeneration
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Harmony mode to switch to; the session's current mode when omitted,
    /// `random` when unrecognized
    pub mode: Option<String>,
}

/// Regenerate the working palette
///
/// Draws a fresh random base color and derives five candidates under the
/// harmony rule, then merges slot by slot: locked slots keep their color,
/// unlocked slots take the candidate. A fully locked palette therefore
/// comes back unchanged.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Regenerated session state", body = SessionResponse),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Palette"
)]
pub async fn handle_generate<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
    body: Option<Json<GenerateRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let mode = request.mode.as_deref().map(resolve_mode);

    let id = SessionId::new(id);
    let mut session = registry.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    session.generate(mode, &mut rand::thread_rng());

    tracing::debug!(session_id = %id, mode = %session.mode, "Palette regenerated");

    let response = SessionResponse::from_session(&session);
    registry.update(session).await?;

    Ok(Json(response))
}

/// Request body for toggling a slot lock
#[derive(Debug, Deserialize, ToSchema)]
pub struct LockRequest {
    /// Slot index in [0, 5)
    pub index: usize,
}

/// Toggle the lock on a palette slot
///
/// Locked slots survive regeneration unchanged. The lock belongs to the
/// color, not the position: a later reorder moves it along.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/lock",
    request_body = LockRequest,
    responses(
        (status = 200, description = "Updated session state", body = SessionResponse),
        (status = 400, description = "Slot index out of range"),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Palette"
)]
pub async fn handle_lock<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
    Json(request): Json<LockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionId::new(id);
    let mut session = registry.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    let locked = session.palette.toggle_lock(request.index)?;

    tracing::debug!(session_id = %id, index = request.index, locked, "Slot lock toggled");

    let response = SessionResponse::from_session(&session);
    registry.update(session).await?;

    Ok(Json(response))
}

/// Request body for moving a palette slot
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderRequest {
    /// Slot index to move, in [0, 5)
    pub from: usize,
    /// Destination index in [0, 5); omitting it cancels the move (the
    /// drag was dropped outside a valid target)
    pub to: Option<usize>,
}

/// Move a palette slot to a new position
///
/// The slot's color and its lock state move together; the slots in
/// between shift by one. Out-of-range indices fail without touching the
/// palette.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Updated session state", body = SessionResponse),
        (status = 400, description = "Slot index out of range"),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Palette"
)]
pub async fn handle_reorder<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
    Json(request): Json<ReorderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionId::new(id);
    let mut session = registry.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    session.palette.reorder(request.from, request.to)?;

    tracing::debug!(
        session_id = %id,
        from = request.from,
        to = ?request.to,
        "Palette reordered"
    );

    let response = SessionResponse::from_session(&session);
    registry.update(session).await?;

    Ok(Json(response))
}
