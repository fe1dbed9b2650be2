use axum::{
    extract::{Path, State},
    http::header,
    response::{AppendHeaders, IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use color_harmony::SavedPalette;

use crate::error::ApiError;
use crate::models::SessionId;
use crate::services::SessionRegistry;

/// One saved palette, as serialized in save and export responses
#[derive(Debug, Serialize, ToSchema)]
pub struct SavedPaletteResponse {
    /// Collection-unique id, usable with the delete endpoint
    pub id: u64,
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
    /// The five colors as "#RRGGBB" strings, in the order they were
    /// displayed at save time
    pub colors: Vec<String>,
}

impl SavedPaletteResponse {
    fn from_entry(entry: &SavedPalette) -> Self {
        Self {
            id: entry.id,
            saved_at: entry.saved_at,
            colors: entry.colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Save a snapshot of the working palette
///
/// The five current colors are copied into the session's collection;
/// later changes to the working palette do not affect the snapshot. Lock
/// state is not part of a snapshot.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/palettes",
    responses(
        (status = 200, description = "The saved snapshot", body = SavedPaletteResponse),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Collection"
)]
pub async fn handle_save_palette<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionId::new(id);
    let mut session = registry.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    let entry = session.collection.save(*session.palette.colors());
    let response = SavedPaletteResponse::from_entry(entry);

    tracing::info!(session_id = %id, palette_id = response.id, "Palette saved");

    registry.update(session).await?;

    Ok(Json(response))
}

/// Response from saved-palette deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletePaletteResponse {
    /// Whether an entry was actually removed; false for an unknown id
    pub deleted: bool,
}

/// Delete a saved palette by id
///
/// Idempotent: deleting an id that is not in the collection reports
/// `deleted: false` and leaves everything untouched.
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}/palettes/{palette_id}",
    responses(
        (status = 200, description = "Deletion result", body = DeletePaletteResponse),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
        ("palette_id" = u64, Path, description = "Saved palette id"),
    ),
    tag = "Collection"
)]
pub async fn handle_delete_palette<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path((id, palette_id)): Path<(String, u64)>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionId::new(id);
    let mut session = registry.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    let deleted = session.collection.delete(palette_id);

    if deleted {
        tracing::info!(session_id = %id, palette_id, "Saved palette deleted");
        registry.update(session).await?;
    }

    Ok(Json(DeletePaletteResponse { deleted }))
}

/// Export every saved palette
///
/// Returns the collection as an order-preserving JSON array; the payload
/// round-trips (ids, timestamps and colors survive re-import elsewhere).
/// A download filename is attached so browsers save it directly; the
/// actual file write is the client's business.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/palettes/export",
    responses(
        (status = 200, description = "All saved palettes, in insertion order", body = [SavedPaletteResponse]),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session token"),
    ),
    tag = "Collection"
)]
pub async fn handle_export<R: SessionRegistry>(
    State(registry): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionId::new(id);
    let session = registry.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    let payload: Vec<SavedPaletteResponse> = session
        .collection
        .entries()
        .iter()
        .map(SavedPaletteResponse::from_entry)
        .collect();

    tracing::debug!(session_id = %id, count = payload.len(), "Collection exported");

    Ok((
        AppendHeaders([(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"color-palettes.json\"",
        )]),
        Json(payload),
    ))
}
