/// API route modules
pub mod health;
pub mod sections;
pub mod songs;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes mounted under `/api`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        // Songs
        .route("/songs", get(songs::list_songs))
        .route("/songs/search", get(songs::search_songs))
        .route("/songs/queue/generate", get(songs::generate_queue))
        .route("/songs/:id", get(songs::get_song))
        // Sections
        .route("/sections", get(sections::list_sections))
        .route("/sections/:slug", get(sections::get_section))
}
