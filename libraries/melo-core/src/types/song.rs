//! Song domain types

use super::ids::{SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Genre (e.g. "Pop", "Bhangra")
    pub genre: String,

    /// Language of the lyrics (e.g. "Punjabi", "English")
    pub language: String,

    /// Playback duration in seconds
    pub duration: u32,

    /// Playable media locator, unique across the catalog
    pub media_url: String,

    /// Artwork locator
    pub thumbnail_url: String,

    /// Account that contributed the song
    pub uploaded_by: UserId,

    /// Whether the song is promoted in featured listings
    pub featured: bool,

    /// When the song entered the catalog
    pub created_at: DateTime<Utc>,

    /// Last modification of the catalog record
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Build a catalog record from ingest data with a fresh id and timestamps
    pub fn from_create(song: CreateSong) -> Self {
        let now = Utc::now();
        Self {
            id: SongId::generate(),
            title: song.title,
            artist: song.artist,
            album: song.album,
            genre: song.genre,
            language: song.language,
            duration: song.duration,
            media_url: song.media_url,
            thumbnail_url: song.thumbnail_url,
            uploaded_by: song.uploaded_by,
            featured: song.featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the song can take part in a duration-bounded selection
    pub fn has_positive_duration(&self) -> bool {
        self.duration > 0
    }

    /// Catalog listing order: newest first, then id ascending
    pub fn newest_first(a: &Song, b: &Song) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Data for ingesting a new song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Album name
    #[serde(default)]
    pub album: Option<String>,
    /// Genre
    pub genre: String,
    /// Language
    pub language: String,
    /// Duration in seconds
    pub duration: u32,
    /// Playable media locator
    pub media_url: String,
    /// Artwork locator
    pub thumbnail_url: String,
    /// Contributing account
    pub uploaded_by: UserId,
    /// Featured flag
    #[serde(default)]
    pub featured: bool,
}
