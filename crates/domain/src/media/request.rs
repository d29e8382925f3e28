//! Media upsert request.

use chrono::NaiveDate;
use thiserror::Error;

use super::MediaType;
use crate::genre::join_genres;

/// A normalized record ready to be inserted or updated by TMDB ID.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertMediaRequest {
    pub tmdb_id: i64,
    pub title: String,
    pub poster_path: String,
    pub release_date: Option<NaiveDate>,
    pub genres: String,
    pub media_type: MediaType,
}

/// Error when building an upsert request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateMediaError {
    /// Title is empty.
    #[error("Title cannot be empty (tmdb_id={0})")]
    EmptyTitle(i64),
    /// TMDB IDs are positive.
    #[error("Invalid TMDB ID: {0}")]
    InvalidTmdbId(i64),
}

impl UpsertMediaRequest {
    /// Create a new request with validation.
    pub fn new(tmdb_id: i64, title: &str, media_type: MediaType) -> Result<Self, CreateMediaError> {
        if tmdb_id <= 0 {
            return Err(CreateMediaError::InvalidTmdbId(tmdb_id));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(CreateMediaError::EmptyTitle(tmdb_id));
        }

        Ok(Self {
            tmdb_id,
            title: title.to_string(),
            poster_path: String::new(),
            release_date: None,
            genres: String::new(),
            media_type,
        })
    }

    /// Set the poster path.
    pub fn with_poster_path(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = poster_path.into();
        self
    }

    /// Set the release (or first air) date.
    pub fn with_release_date(mut self, release_date: Option<NaiveDate>) -> Self {
        self.release_date = release_date;
        self
    }

    /// Set the genre names, joined in the given order.
    pub fn with_genres<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.genres = join_genres(names);
        self
    }
}
