//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.

#![allow(dead_code)]

use melo_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = melo_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        melo_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: ingest data for a song
pub fn song_data(title: &str, artist: &str, genre: &str, language: &str, duration: u32) -> CreateSong {
    let slug = title.to_lowercase().replace(' ', "-");
    CreateSong {
        title: title.to_string(),
        artist: artist.to_string(),
        album: None,
        genre: genre.to_string(),
        language: language.to_string(),
        duration,
        media_url: format!("https://cdn.example.com/songs/{slug}.mp3"),
        thumbnail_url: format!("https://cdn.example.com/art/{slug}.jpg"),
        uploaded_by: UserId::new("uploader-1"),
        featured: false,
    }
}

/// Test fixture: insert a song and return the stored record
pub async fn insert_song(pool: &SqlitePool, song: CreateSong) -> Song {
    melo_storage::songs::create(pool, song)
        .await
        .expect("Failed to create song")
}

/// Test fixture: insert a song with an explicit creation time (unix seconds)
pub async fn insert_song_at(pool: &SqlitePool, song: CreateSong, created_at: i64) -> Song {
    let song = insert_song(pool, song).await;

    sqlx::query("UPDATE songs SET created_at = ?, updated_at = ? WHERE id = ?")
        .bind(created_at * 1_000_000)
        .bind(created_at * 1_000_000)
        .bind(&song.id)
        .execute(pool)
        .await
        .expect("Failed to set creation time");

    melo_storage::songs::get_by_id(pool, &song.id)
        .await
        .unwrap()
        .unwrap()
}
