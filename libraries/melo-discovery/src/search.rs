//! Free-text catalog search

use melo_core::{CatalogStore, Result, SearchField, Song};

/// Search the catalog for `query`
///
/// A song matches when any searchable field contains the trimmed query,
/// ignoring case. A blank query matches nothing and never reaches the
/// store. Results are newest-first and truncated to `limit` when set.
pub async fn search(
    catalog: &dyn CatalogStore,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<Song>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let mut songs = catalog
        .find_by_substring(&SearchField::ALL, query)
        .await?;

    sort_newest_first(&mut songs);

    if let Some(limit) = limit {
        songs.truncate(limit);
    }

    tracing::debug!(query, hits = songs.len(), "Catalog search");

    Ok(songs)
}

/// Listing order shared by search and filters
pub fn sort_newest_first(songs: &mut [Song]) {
    songs.sort_by(Song::newest_first);
}

#[cfg(test)]
mod tests {
    use super::*;
    use melo_core::types::{CreateSong, SongId, UserId};

    fn song(id: &str, created_at: i64) -> Song {
        let mut song = Song::from_create(CreateSong {
            title: id.to_string(),
            artist: "Artist".to_string(),
            album: None,
            genre: "Pop".to_string(),
            language: "English".to_string(),
            duration: 120,
            media_url: format!("{id}.mp3"),
            thumbnail_url: format!("{id}.jpg"),
            uploaded_by: UserId::new("uploader"),
            featured: false,
        });
        song.id = SongId::new(id);
        song.created_at = chrono::DateTime::from_timestamp(created_at, 0).unwrap();
        song
    }

    #[test]
    fn sorts_newest_first_with_id_tie_break() {
        let mut songs = vec![song("b", 10), song("c", 20), song("a", 10)];
        sort_newest_first(&mut songs);

        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
