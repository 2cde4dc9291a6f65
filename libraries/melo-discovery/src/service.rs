//! Discovery service facade

use crate::sections::{self, Section};
use crate::{focus_queue, search};
use melo_core::{CatalogStore, FilterSpec, FocusQueue, MeloError, Result, Song, SongId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Discovery tuning supplied by the deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Maximum number of search hits returned; `None` disables the cap
    #[serde(default = "default_search_limit")]
    pub search_limit: Option<usize>,

    /// Named catalog sections
    #[serde(default = "sections::default_sections")]
    pub sections: Vec<Section>,
}

fn default_search_limit() -> Option<usize> {
    Some(50)
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            sections: sections::default_sections(),
        }
    }
}

/// Search, section and focus-queue operations over one catalog
///
/// Cheap to clone; every operation is a stateless read.
#[derive(Clone)]
pub struct Discovery {
    catalog: Arc<dyn CatalogStore>,
    config: Arc<DiscoveryConfig>,
}

impl Discovery {
    pub fn new(catalog: Arc<dyn CatalogStore>, config: DiscoveryConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogStore> {
        &self.catalog
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Free-text search, newest first, capped at `search_limit`
    pub async fn search(&self, query: &str) -> Result<Vec<Song>> {
        search::search(self.catalog.as_ref(), query, self.config.search_limit).await
    }

    /// Songs matching `spec`, newest first
    pub async fn filter(&self, spec: &FilterSpec) -> Result<Vec<Song>> {
        sections::filter(self.catalog.as_ref(), spec).await
    }

    /// Configured sections
    pub fn sections(&self) -> &[Section] {
        &self.config.sections
    }

    /// Resolve a configured section and list its songs
    pub async fn section(&self, slug: &str) -> Result<(Section, Vec<Song>)> {
        let section = self
            .config
            .sections
            .iter()
            .find(|s| s.slug == slug)
            .cloned()
            .ok_or_else(|| MeloError::not_found("Section", slug))?;

        let songs = self.filter(&section.filter).await?;
        Ok((section, songs))
    }

    /// Single song lookup
    pub async fn song(&self, id: &SongId) -> Result<Song> {
        self.catalog
            .get_song(id)
            .await?
            .ok_or_else(|| MeloError::not_found("Song", id.as_str()))
    }

    /// Random queue no longer than `duration_minutes`
    pub async fn generate_queue(&self, duration_minutes: f64) -> Result<FocusQueue> {
        focus_queue::generate(self.catalog.as_ref(), duration_minutes).await
    }

    /// Random queue no longer than `duration_minutes`, drawing from `rng`
    pub async fn generate_queue_with_rng<R: Rng + ?Sized>(
        &self,
        duration_minutes: f64,
        rng: &mut R,
    ) -> Result<FocusQueue> {
        focus_queue::generate_with_rng(self.catalog.as_ref(), duration_minutes, rng).await
    }
}
