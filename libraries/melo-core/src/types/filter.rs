//! Catalog filter and search field types

use super::song::Song;
use serde::{Deserialize, Serialize};

/// Equality constraints over language, genre and the featured flag
///
/// Present fields are combined with logical AND. Text fields compare
/// case-insensitively. An empty spec matches the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Required language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Required genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Required featured flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl FilterSpec {
    /// Constrain the language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Constrain the genre
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Constrain the featured flag
    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.genre.is_none() && self.featured.is_none()
    }

    /// Reference predicate for the filter semantics
    pub fn matches(&self, song: &Song) -> bool {
        let text_eq = |wanted: &Option<String>, actual: &str| {
            wanted
                .as_deref()
                .map_or(true, |w| w.to_lowercase() == actual.to_lowercase())
        };

        text_eq(&self.language, &song.language)
            && text_eq(&self.genre, &song.genre)
            && self.featured.map_or(true, |f| f == song.featured)
    }
}

/// Song fields covered by free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Song title
    Title,
    /// Artist name
    Artist,
    /// Genre
    Genre,
    /// Language
    Language,
}

impl SearchField {
    /// Every searchable field
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Artist,
        SearchField::Genre,
        SearchField::Language,
    ];

    /// Column name in the catalog table
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Artist => "artist",
            SearchField::Genre => "genre",
            SearchField::Language => "language",
        }
    }

    /// Read the field from a song
    pub fn value(self, song: &Song) -> &str {
        match self {
            SearchField::Title => &song.title,
            SearchField::Artist => &song.artist,
            SearchField::Genre => &song.genre,
            SearchField::Language => &song.language,
        }
    }

    /// Case-insensitive substring test of this field against `needle`
    pub fn contains(self, song: &Song, needle: &str) -> bool {
        self.value(song)
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CreateSong, UserId};

    fn song(language: &str, genre: &str, featured: bool) -> Song {
        Song::from_create(CreateSong {
            title: "Kesariya".to_string(),
            artist: "Arijit Singh".to_string(),
            album: None,
            genre: genre.to_string(),
            language: language.to_string(),
            duration: 268,
            media_url: "https://cdn.example.com/kesariya.mp3".to_string(),
            thumbnail_url: "https://cdn.example.com/kesariya.jpg".to_string(),
            uploaded_by: UserId::new("uploader"),
            featured,
        })
    }

    #[test]
    fn empty_spec_matches_everything() {
        let spec = FilterSpec::default();
        assert!(spec.is_empty());
        assert!(spec.matches(&song("Hindi", "Romantic", false)));
        assert!(spec.matches(&song("Punjabi", "Bhangra", true)));
    }

    #[test]
    fn text_fields_compare_case_insensitively() {
        let spec = FilterSpec::default().with_language("hindi").with_genre("ROMANTIC");
        assert!(spec.matches(&song("Hindi", "Romantic", false)));
        assert!(!spec.matches(&song("Hindi", "Pop", false)));
    }

    #[test]
    fn fields_combine_with_and() {
        let spec = FilterSpec::default()
            .with_language("Punjabi")
            .with_featured(true);
        assert!(spec.matches(&song("Punjabi", "Bhangra", true)));
        assert!(!spec.matches(&song("Punjabi", "Bhangra", false)));
        assert!(!spec.matches(&song("Hindi", "Bhangra", true)));
    }

    #[test]
    fn equality_is_not_substring() {
        let spec = FilterSpec::default().with_genre("Pop");
        assert!(!spec.matches(&song("English", "K-Pop", false)));
    }

    #[test]
    fn search_field_contains() {
        let s = song("Hindi", "Romantic", false);
        assert!(SearchField::Artist.contains(&s, "arijit"));
        assert!(SearchField::Title.contains(&s, "SARI"));
        assert!(!SearchField::Genre.contains(&s, "arijit"));
    }
}
