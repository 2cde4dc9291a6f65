//! Catalog seeding from JSON files
//!
//! The only write path into the catalog. A seed file is a JSON array of
//! song records; songs whose media URL is already cataloged are skipped.

use melo_core::{types::CreateSong, CatalogStore, MeloError, Result};
use std::path::Path;

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Parse a seed file
pub fn read_seed_file(path: &Path) -> Result<Vec<CreateSong>> {
    let contents = std::fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Parse seed JSON
pub fn parse_seed(json: &str) -> Result<Vec<CreateSong>> {
    Ok(serde_json::from_str(json)?)
}

/// Insert `songs` into `catalog`, skipping duplicates
///
/// Any failure other than a duplicate aborts the run.
pub async fn seed_catalog(catalog: &dyn CatalogStore, songs: Vec<CreateSong>) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for song in songs {
        let title = song.title.clone();
        match catalog.insert_song(song).await {
            Ok(song) => {
                tracing::debug!(id = %song.id, title = %song.title, "Seeded song");
                report.inserted += 1;
            }
            Err(MeloError::Duplicate(reason)) => {
                tracing::warn!(title = %title, "Skipping song: {}", reason);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Catalog seeding finished"
    );

    Ok(report)
}
