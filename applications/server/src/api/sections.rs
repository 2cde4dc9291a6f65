/// Sections API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use melo_core::types::{FilterSpec, Song};
use melo_discovery::Section;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub slug: String,
    pub title: String,
    pub filter: FilterSpec,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            slug: section.slug.clone(),
            title: section.title.clone(),
            filter: section.filter.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub success: bool,
    pub count: usize,
    pub sections: Vec<SectionSummary>,
}

#[derive(Debug, Serialize)]
pub struct SectionSongsResponse {
    pub success: bool,
    pub section: SectionSummary,
    pub count: usize,
    pub songs: Vec<Song>,
}

/// GET /api/sections
pub async fn list_sections(State(app_state): State<AppState>) -> Json<SectionsResponse> {
    let sections: Vec<SectionSummary> = app_state
        .discovery
        .sections()
        .iter()
        .map(SectionSummary::from)
        .collect();

    Json(SectionsResponse {
        success: true,
        count: sections.len(),
        sections,
    })
}

/// GET /api/sections/:slug
pub async fn get_section(
    Path(slug): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<SectionSongsResponse>> {
    let (section, songs) = app_state.discovery.section(&slug).await?;

    Ok(Json(SectionSongsResponse {
        success: true,
        section: SectionSummary::from(&section),
        count: songs.len(),
        songs,
    }))
}
