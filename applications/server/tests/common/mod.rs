//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use melo_core::types::*;
use melo_core::{CatalogStore, MeloError, Result};
use melo_discovery::DiscoveryConfig;
use melo_server::{create_router, state::AppState};
use melo_storage::MemoryCatalog;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Test fixture: a catalog song with fixed id and creation time
pub fn song(
    id: &str,
    title: &str,
    artist: &str,
    genre: &str,
    language: &str,
    duration: u32,
    created_at: i64,
) -> Song {
    let mut song = Song::from_create(CreateSong {
        title: title.to_string(),
        artist: artist.to_string(),
        album: None,
        genre: genre.to_string(),
        language: language.to_string(),
        duration,
        media_url: format!("https://cdn.example.com/songs/{id}.mp3"),
        thumbnail_url: format!("https://cdn.example.com/art/{id}.jpg"),
        uploaded_by: UserId::new("admin"),
        featured: false,
    });
    song.id = SongId::new(id);
    song.created_at = chrono::DateTime::from_timestamp(created_at, 0).unwrap();
    song.updated_at = song.created_at;
    song
}

pub fn featured(mut song: Song) -> Song {
    song.featured = true;
    song
}

/// Small mixed-language catalog
pub fn sample_songs() -> Vec<Song> {
    vec![
        featured(song("lover", "Lover", "Diljit Dosanjh", "Pop", "Punjabi", 190, 1_700_000_500)),
        song("brown-munde", "Brown Munde", "AP Dhillon", "Hip-Hop", "Punjabi", 267, 1_700_000_400),
        featured(song("kesariya", "Kesariya", "Arijit Singh", "Romantic", "Hindi", 268, 1_700_000_300)),
        song("levitating", "Levitating", "Dua Lipa", "Dance", "English", 203, 1_700_000_200),
        song("rain-loop", "Rain Loop", "Lofi Lab", "Lo-fi", "Instrumental", 0, 1_700_000_100),
    ]
}

/// Router over an in-memory catalog
pub fn create_test_app(songs: Vec<Song>) -> Router {
    create_test_app_with(Arc::new(MemoryCatalog::with_songs(songs)), DiscoveryConfig::default())
}

pub fn create_test_app_with(catalog: Arc<dyn CatalogStore>, config: DiscoveryConfig) -> Router {
    create_router(AppState::from_catalog(catalog, config))
}

/// Issue a GET and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();

    (status, json)
}

/// Ids of the songs in a JSON array, in order
pub fn ids(songs: &serde_json::Value) -> Vec<String> {
    songs
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect()
}

/// Catalog whose every query fails like a dropped database connection
pub struct BrokenCatalog;

#[async_trait]
impl CatalogStore for BrokenCatalog {
    async fn find_by_filter(&self, _spec: &FilterSpec) -> Result<Vec<Song>> {
        Err(broken())
    }

    async fn find_by_substring(&self, _fields: &[SearchField], _query: &str) -> Result<Vec<Song>> {
        Err(broken())
    }

    async fn find_all_with_positive_duration(&self) -> Result<Vec<Song>> {
        Err(broken())
    }

    async fn get_song(&self, _id: &SongId) -> Result<Option<Song>> {
        Err(broken())
    }

    async fn insert_song(&self, _song: CreateSong) -> Result<Song> {
        Err(broken())
    }

    async fn count_songs(&self) -> Result<usize> {
        Err(broken())
    }
}

fn broken() -> MeloError {
    MeloError::Database("error returned from database: database disk image is malformed".to_string())
}
