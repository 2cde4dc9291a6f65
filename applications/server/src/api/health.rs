/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use melo_core::CatalogStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub songs: usize,
}

/// GET /api/health - Health check endpoint
///
/// Counts the catalog so an unreachable store reports as a failure.
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let songs = app_state.discovery.catalog().count_songs().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        songs,
    }))
}
