use crate::songs;
use async_trait::async_trait;
use melo_core::{catalog::CatalogStore, error::Result, types::*};
use sqlx::SqlitePool;

/// Catalog store backed by `SQLite`
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn find_by_filter(&self, spec: &FilterSpec) -> Result<Vec<Song>> {
        songs::find_by_filter(&self.pool, spec).await
    }

    async fn find_by_substring(&self, fields: &[SearchField], query: &str) -> Result<Vec<Song>> {
        songs::search(&self.pool, fields, query).await
    }

    async fn find_all_with_positive_duration(&self) -> Result<Vec<Song>> {
        songs::get_with_positive_duration(&self.pool).await
    }

    async fn get_song(&self, id: &SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn insert_song(&self, song: CreateSong) -> Result<Song> {
        songs::create(&self.pool, song).await
    }

    async fn count_songs(&self) -> Result<usize> {
        songs::count(&self.pool).await
    }
}
