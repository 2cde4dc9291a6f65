/// Songs API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use melo_core::types::{FilterSpec, Song, SongId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
}

impl FilterQuery {
    /// Blank text parameters are ignored; `featured` must be `true` or `false`
    pub fn into_filter(self) -> Result<FilterSpec> {
        let mut spec = FilterSpec::default();

        if let Some(language) = non_blank(self.language) {
            spec = spec.with_language(language);
        }
        if let Some(genre) = non_blank(self.genre) {
            spec = spec.with_genre(genre);
        }
        if let Some(featured) = non_blank(self.featured) {
            let featured = match featured.to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(ServerError::BadRequest(format!(
                        "featured must be true or false, got {featured:?}"
                    )))
                }
            };
            spec = spec.with_featured(featured);
        }

        Ok(spec)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Deserialize)]
pub struct QueueQuery {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SongsResponse {
    pub success: bool,
    pub count: usize,
    pub songs: Vec<Song>,
}

impl From<Vec<Song>> for SongsResponse {
    fn from(songs: Vec<Song>) -> Self {
        Self {
            success: true,
            count: songs.len(),
            songs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub success: bool,
    pub song: Song,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueResponse {
    pub success: bool,
    pub requested_duration_minutes: f64,
    pub requested_duration_seconds: u64,
    pub actual_duration_seconds: u64,
    pub actual_duration_minutes: f64,
    pub count: usize,
    pub queue: Vec<Song>,
}

/// GET /api/songs/search?q=
pub async fn search_songs(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SongsResponse>> {
    let Query(query) = query?;
    let q = query.q.unwrap_or_default();
    let songs = app_state.discovery.search(&q).await?;
    Ok(Json(songs.into()))
}

/// GET /api/songs?language=&genre=&featured=
pub async fn list_songs(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<SongsResponse>> {
    let Query(query) = query?;
    let spec = query.into_filter()?;
    let songs = app_state.discovery.filter(&spec).await?;
    Ok(Json(songs.into()))
}

/// GET /api/songs/:id
pub async fn get_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<SongResponse>> {
    let song = app_state.discovery.song(&SongId::new(id)).await?;
    Ok(Json(SongResponse {
        success: true,
        song,
    }))
}

/// GET /api/songs/queue/generate?duration=
/// Random queue whose total length fits within `duration` minutes
pub async fn generate_queue(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<QueueQuery>, QueryRejection>,
) -> Result<Json<QueueResponse>> {
    let Query(query) = query?;
    let raw = query
        .duration
        .ok_or_else(|| ServerError::BadRequest("duration is required".to_string()))?;

    let minutes: f64 = raw.trim().parse().map_err(|_| {
        ServerError::BadRequest(format!("duration must be a number of minutes, got {raw:?}"))
    })?;

    let queue = app_state.discovery.generate_queue(minutes).await?;

    Ok(Json(QueueResponse {
        success: true,
        requested_duration_minutes: queue.requested_minutes,
        requested_duration_seconds: queue.requested_seconds,
        actual_duration_seconds: queue.actual_seconds,
        actual_duration_minutes: queue.actual_minutes(),
        count: queue.count(),
        queue: queue.songs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(language: Option<&str>, genre: Option<&str>, featured: Option<&str>) -> FilterQuery {
        FilterQuery {
            language: language.map(str::to_string),
            genre: genre.map(str::to_string),
            featured: featured.map(str::to_string),
        }
    }

    #[test]
    fn blank_parameters_are_ignored() {
        let spec = query(Some(""), Some("   "), None).into_filter().unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn featured_accepts_booleans_only() {
        let spec = query(None, None, Some("TRUE")).into_filter().unwrap();
        assert_eq!(spec.featured, Some(true));

        let spec = query(None, None, Some("false")).into_filter().unwrap();
        assert_eq!(spec.featured, Some(false));

        let err = query(None, None, Some("yes")).into_filter().unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn language_and_genre_pass_through() {
        let spec = query(Some("Punjabi"), Some("Pop"), None).into_filter().unwrap();
        assert_eq!(spec, FilterSpec::default().with_language("Punjabi").with_genre("Pop"));
    }
}
