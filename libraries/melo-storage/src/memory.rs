//! In-memory catalog store

use async_trait::async_trait;
use melo_core::{catalog::CatalogStore, error::Result, types::*, MeloError};
use tokio::sync::RwLock;

/// Catalog store held entirely in process memory
///
/// Shares the matching rules of `FilterSpec::matches` and
/// `SearchField::contains`, so it folds case for all of Unicode where the
/// `SQLite` store only folds ASCII.
#[derive(Default)]
pub struct MemoryCatalog {
    songs: RwLock<Vec<Song>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from ready-made songs, keeping their ids and timestamps
    ///
    /// Songs reusing a media URL already present are dropped.
    pub fn with_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let mut unique: Vec<Song> = Vec::new();
        for song in songs {
            if unique.iter().all(|s| s.media_url != song.media_url) {
                unique.push(song);
            }
        }

        Self {
            songs: RwLock::new(unique),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find_by_filter(&self, spec: &FilterSpec) -> Result<Vec<Song>> {
        let songs = self.songs.read().await;
        Ok(songs.iter().filter(|s| spec.matches(s)).cloned().collect())
    }

    async fn find_by_substring(&self, fields: &[SearchField], query: &str) -> Result<Vec<Song>> {
        let songs = self.songs.read().await;
        Ok(songs
            .iter()
            .filter(|s| fields.iter().any(|f| f.contains(s, query)))
            .cloned()
            .collect())
    }

    async fn find_all_with_positive_duration(&self) -> Result<Vec<Song>> {
        let songs = self.songs.read().await;
        Ok(songs
            .iter()
            .filter(|s| s.has_positive_duration())
            .cloned()
            .collect())
    }

    async fn get_song(&self, id: &SongId) -> Result<Option<Song>> {
        let songs = self.songs.read().await;
        Ok(songs.iter().find(|s| &s.id == id).cloned())
    }

    async fn insert_song(&self, song: CreateSong) -> Result<Song> {
        let mut songs = self.songs.write().await;

        if songs.iter().any(|s| s.media_url == song.media_url) {
            return Err(MeloError::duplicate(format!(
                "media URL already in catalog: {}",
                song.media_url
            )));
        }

        let song = Song::from_create(song);
        songs.push(song.clone());
        Ok(song)
    }

    async fn count_songs(&self) -> Result<usize> {
        Ok(self.songs.read().await.len())
    }
}
