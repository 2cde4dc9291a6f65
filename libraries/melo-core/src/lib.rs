//! Melo Core
//!
//! Domain types, the catalog store contract, and error handling shared by
//! every Melo crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `FilterSpec`, `SearchField`, `FocusQueue`
//! - **Catalog Contract**: the `CatalogStore` trait implemented by storage backends
//! - **Error Handling**: Unified `MeloError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use melo_core::types::{CreateSong, FilterSpec, Song, UserId};
//!
//! let song = Song::from_create(CreateSong {
//!     title: "Tum Hi Ho".to_string(),
//!     artist: "Arijit Singh".to_string(),
//!     album: Some("Aashiqui 2".to_string()),
//!     genre: "Romantic".to_string(),
//!     language: "Hindi".to_string(),
//!     duration: 262,
//!     media_url: "https://cdn.example.com/tum-hi-ho.mp3".to_string(),
//!     thumbnail_url: "https://cdn.example.com/tum-hi-ho.jpg".to_string(),
//!     uploaded_by: UserId::new("admin"),
//!     featured: true,
//! });
//!
//! let hindi = FilterSpec::default().with_language("hindi");
//! assert!(hindi.matches(&song));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Catalog store contract
pub mod catalog;
/// Error types
pub mod error;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogStore;
pub use error::{MeloError, Result};

pub use types::{
    CreateSong, FilterSpec, FocusQueue, SearchField, Song, SongId, UserId,
};
