//! Media record entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::MediaType;

/// Canonical local representation of a catalog entry, regardless of which
/// provider endpoint it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MediaRecord {
    /// Local ID, assigned on first insert and stable across updates.
    pub id: i64,
    /// Provider (TMDB) ID. Unique across the table.
    pub tmdb_id: i64,
    pub title: String,
    /// Poster path relative to the TMDB image CDN, possibly empty.
    pub poster_path: String,
    /// Release date for movies, first air date for series.
    pub release_date: Option<NaiveDate>,
    /// Comma-separated genre names, empty until resolved or backfilled.
    pub genres: String,
    pub media_type: MediaType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaRecord {
    /// Whether the genre text still needs a backfill.
    pub fn is_missing_genres(&self) -> bool {
        self.genres.trim().is_empty()
    }
}
