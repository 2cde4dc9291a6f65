//! Melo - Song Discovery
//!
//! Read-only discovery over the song catalog.
//!
//! This crate provides:
//! - Free-text search across title, artist, genre and language
//! - Section filtering by language, genre and featured flag
//! - Named sections configured by the deployment
//! - Focus queues: random, duration-bounded playback sequences
//!
//! # Architecture
//!
//! `melo-discovery` only talks to the catalog through
//! `melo_core::CatalogStore`:
//! - No dependency on `sqlx` or any storage backend
//! - No dependency on the HTTP layer
//! - Ordering is imposed here, never trusted from the store
//!
//! # Example
//!
//! ```rust,no_run
//! use melo_core::CatalogStore;
//! use melo_discovery::{Discovery, DiscoveryConfig};
//! use std::sync::Arc;
//!
//! # async fn example(catalog: Arc<dyn CatalogStore>) -> melo_core::Result<()> {
//! let discovery = Discovery::new(catalog, DiscoveryConfig::default());
//!
//! let hits = discovery.search("arijit").await?;
//! let queue = discovery.generate_queue(25.0).await?;
//! assert!(queue.actual_seconds <= 25 * 60);
//! # Ok(())
//! # }
//! ```

pub mod focus_queue;
pub mod search;
pub mod sections;

mod service;

pub use sections::Section;
pub use service::{Discovery, DiscoveryConfig};
