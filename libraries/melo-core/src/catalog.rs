//! Catalog store contract

use crate::error::Result;
use crate::types::{CreateSong, FilterSpec, SearchField, Song, SongId};
use async_trait::async_trait;

/// Read access to the song catalog
///
/// This trait abstracts the catalog so discovery services can run against
/// the `SQLite` store in production and an in-memory store in tests.
/// Implementations return songs in any order; callers impose ordering.
/// A failing store must return an error, never an empty list.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Discovery queries
    // ========================================================================

    /// Songs matching every constraint of `spec` (case-insensitive equality)
    async fn find_by_filter(&self, spec: &FilterSpec) -> Result<Vec<Song>>;

    /// Songs where any of `fields` contains `query` (case-insensitive substring)
    async fn find_by_substring(&self, fields: &[SearchField], query: &str) -> Result<Vec<Song>>;

    /// Candidate pool for focus queues: every song with `duration > 0`
    async fn find_all_with_positive_duration(&self) -> Result<Vec<Song>>;

    // ========================================================================
    // Catalog maintenance
    // ========================================================================

    /// Get song by ID
    async fn get_song(&self, id: &SongId) -> Result<Option<Song>>;

    /// Insert a new song; a reused media URL yields `MeloError::Duplicate`
    async fn insert_song(&self, song: CreateSong) -> Result<Song>;

    /// Number of songs in the catalog
    async fn count_songs(&self) -> Result<usize>;
}
