use chrono::{DateTime, Utc};
use melo_core::{error::Result, types::*, MeloError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const SONG_COLUMNS: &str = "id, title, artist, album, genre, language, duration, media_url, \
     thumbnail_url, uploaded_by, featured, created_at, updated_at";

const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id ASC";

/// Get songs matching every constraint in `spec`
///
/// Text constraints compare against the `*_folded` columns, which hold the
/// Rust `to_lowercase` form of each field.
pub async fn find_by_filter(pool: &SqlitePool, spec: &FilterSpec) -> Result<Vec<Song>> {
    let mut conditions: Vec<&str> = Vec::new();

    if spec.language.is_some() {
        conditions.push("language_folded = ?");
    }
    if spec.genre.is_some() {
        conditions.push("genre_folded = ?");
    }
    if spec.featured.is_some() {
        conditions.push("featured = ?");
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let sql = format!("SELECT {SONG_COLUMNS} FROM songs {where_clause} {NEWEST_FIRST}");

    let mut query = sqlx::query(&sql);

    if let Some(language) = &spec.language {
        query = query.bind(fold(language));
    }
    if let Some(genre) = &spec.genre {
        query = query.bind(fold(genre));
    }
    if let Some(featured) = spec.featured {
        query = query.bind(featured);
    }

    let rows = query.fetch_all(pool).await?;

    rows.iter().map(song_from_row).collect()
}

/// Search songs where any of `fields` contains `query`
///
/// Matching is a literal substring test on the folded columns, so `%` and
/// `_` carry no special meaning.
pub async fn search(pool: &SqlitePool, fields: &[SearchField], query: &str) -> Result<Vec<Song>> {
    if fields.is_empty() {
        return Ok(Vec::new());
    }

    let needle = fold(query);

    let conditions: Vec<String> = fields
        .iter()
        .map(|field| format!("instr({}_folded, ?) > 0", field.column()))
        .collect();

    let sql = format!(
        "SELECT {SONG_COLUMNS} FROM songs WHERE {} {NEWEST_FIRST}",
        conditions.join(" OR ")
    );

    let mut q = sqlx::query(&sql);
    for _ in fields {
        q = q.bind(&needle);
    }

    let rows = q.fetch_all(pool).await?;

    rows.iter().map(song_from_row).collect()
}

/// Get every song that can be placed in a focus queue
pub async fn get_with_positive_duration(pool: &SqlitePool) -> Result<Vec<Song>> {
    let sql = format!("SELECT {SONG_COLUMNS} FROM songs WHERE duration > 0 {NEWEST_FIRST}");

    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(song_from_row).collect()
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    let sql = format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = ?");

    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Insert a new song
pub async fn create(pool: &SqlitePool, song: CreateSong) -> Result<Song> {
    let song = Song::from_create(song);

    let result = sqlx::query(
        r"
        INSERT INTO songs (
            id, title, artist, album, genre, language, duration, media_url,
            thumbnail_url, uploaded_by, featured, created_at, updated_at,
            title_folded, artist_folded, genre_folded, language_folded
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(&song.id)
    .bind(&song.title)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(&song.genre)
    .bind(&song.language)
    .bind(i64::from(song.duration))
    .bind(&song.media_url)
    .bind(&song.thumbnail_url)
    .bind(&song.uploaded_by)
    .bind(song.featured)
    .bind(song.created_at.timestamp_micros())
    .bind(song.updated_at.timestamp_micros())
    .bind(fold(&song.title))
    .bind(fold(&song.artist))
    .bind(fold(&song.genre))
    .bind(fold(&song.language))
    .execute(pool)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(MeloError::duplicate(format!(
                "media URL already in catalog: {}",
                song.media_url
            )));
        }
        Err(e) => return Err(e.into()),
    }

    get_by_id(pool, &song.id)
        .await?
        .ok_or_else(|| MeloError::storage("Failed to retrieve created song"))
}

/// Number of songs in the catalog
pub async fn count(pool: &SqlitePool) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await?;

    usize::try_from(count).map_err(|_| MeloError::storage(format!("Invalid song count: {count}")))
}

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    let duration: i64 = row.try_get("duration")?;

    Ok(Song {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        album: row.try_get("album")?,
        genre: row.try_get("genre")?,
        language: row.try_get("language")?,
        duration: u32::try_from(duration)
            .map_err(|_| MeloError::storage(format!("Invalid song duration: {duration}")))?,
        media_url: row.try_get("media_url")?,
        thumbnail_url: row.try_get("thumbnail_url")?,
        uploaded_by: row.try_get("uploaded_by")?,
        featured: row.try_get("featured")?,
        created_at: from_micros(row.try_get("created_at")?)?,
        updated_at: from_micros(row.try_get("updated_at")?)?,
    })
}

fn from_micros(micros: i64) -> Result<DateTime<Utc>> {
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;

    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| MeloError::storage(format!("Invalid timestamp: {micros}")))
}

/// Case folding shared with `FilterSpec::matches` and `SearchField::contains`
fn fold(text: &str) -> String {
    text.to_lowercase()
}
