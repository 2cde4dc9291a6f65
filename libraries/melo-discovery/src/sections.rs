//! Section filtering
//!
//! A section is a named, filter-defined slice of the catalog such as
//! "Punjabi Hits" or "Featured". Unnamed filters come straight from the
//! query string; named ones come from deployment configuration.

use crate::search::sort_newest_first;
use melo_core::{CatalogStore, FilterSpec, Result, Song};
use serde::{Deserialize, Serialize};

/// A named catalog section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// URL-safe identifier, e.g. `punjabi-hits`
    pub slug: String,

    /// Display title, e.g. "Punjabi Hits"
    pub title: String,

    /// Constraints selecting the section's songs
    #[serde(flatten)]
    pub filter: FilterSpec,
}

impl Section {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, filter: FilterSpec) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            filter,
        }
    }
}

/// Songs matching `spec`, newest first
///
/// An empty spec lists the whole catalog.
pub async fn filter(catalog: &dyn CatalogStore, spec: &FilterSpec) -> Result<Vec<Song>> {
    let mut songs = catalog.find_by_filter(spec).await?;

    sort_newest_first(&mut songs);

    tracing::debug!(?spec, matches = songs.len(), "Section filter");

    Ok(songs)
}

/// Sections shown when the deployment configures none
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("featured", "Featured", FilterSpec::default().with_featured(true)),
        Section::new("all-songs", "All Songs", FilterSpec::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_filter_flattens_in_json() {
        let json = r#"{"slug": "punjabi-hits", "title": "Punjabi Hits", "language": "Punjabi"}"#;
        let section: Section = serde_json::from_str(json).unwrap();

        assert_eq!(section.slug, "punjabi-hits");
        assert_eq!(section.filter, FilterSpec::default().with_language("Punjabi"));
    }

    #[test]
    fn default_sections_have_unique_slugs() {
        let sections = default_sections();
        let slugs: std::collections::HashSet<&str> =
            sections.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs.len(), sections.len());
    }
}
