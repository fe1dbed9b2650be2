//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::InMemorySessions;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<InMemorySessions>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        config: Arc::new(config),
        sessions: Arc::new(InMemorySessions::new()),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(handle_create_session))
        .route(
            "/api/sessions/:id",
            get(handle_get_session).delete(handle_delete_session),
        )
        // Working palette
        .route("/api/sessions/:id/generate", post(handle_generate))
        .route("/api/sessions/:id/lock", post(handle_lock))
        .route("/api/sessions/:id/reorder", post(handle_reorder))
        // Saved collection
        .route("/api/sessions/:id/palettes", post(handle_save_palette))
        .route(
            "/api/sessions/:id/palettes/export",
            get(handle_export),
        )
        .route(
            "/api/sessions/:id/palettes/:palette_id",
            delete(handle_delete_palette),
        )
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_create_session(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: Option<axum::Json<api::CreateSessionRequest>>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_create_session(
        axum::extract::State(state.config),
        axum::extract::State(state.sessions),
        body,
    )
    .await
}

async fn handle_get_session(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_get_session(axum::extract::State(state.sessions), path).await
}

async fn handle_delete_session(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_delete_session(axum::extract::State(state.sessions), path).await
}

async fn handle_generate(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
    body: Option<axum::Json<api::GenerateRequest>>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_generate(axum::extract::State(state.sessions), path, body).await
}

async fn handle_lock(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
    body: axum::Json<api::LockRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_lock(axum::extract::State(state.sessions), path, body).await
}

async fn handle_reorder(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
    body: axum::Json<api::ReorderRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_reorder(axum::extract::State(state.sessions), path, body).await
}

async fn handle_save_palette(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_save_palette(axum::extract::State(state.sessions), path).await
}

async fn handle_delete_palette(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<(String, u64)>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_delete_palette(axum::extract::State(state.sessions), path).await
}

async fn handle_export(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_export(axum::extract::State(state.sessions), path).await
}
