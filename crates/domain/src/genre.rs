//! Genre lookup table.
//!
//! TMDB list endpoints return bare genre IDs, and the movie and TV ID spaces
//! are separate: `28` is "Action" for movies but unknown for series. The
//! table keeps one map per media type so lookups never cross over.

use std::collections::HashMap;

use crate::media::MediaType;

/// Separator used when genre names are stored as a single text column.
pub const GENRE_SEPARATOR: &str = ", ";

const MOVIE_GENRES: &[(i64, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

const TV_GENRES: &[(i64, &str)] = &[
    (10759, "Action & Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (10762, "Kids"),
    (9648, "Mystery"),
    (10763, "News"),
    (10764, "Reality"),
    (10765, "Sci-Fi & Fantasy"),
    (10766, "Soap"),
    (10767, "Talk"),
    (10768, "War & Politics"),
    (37, "Western"),
];

/// Join genre names into the stored text form.
pub fn join_genres<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(GENRE_SEPARATOR)
}

/// Outcome of resolving a list of genre IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreResolution {
    /// Names of recognised IDs, in input order.
    pub names: Vec<String>,
    /// IDs with no entry for the requested media type.
    pub unknown: Vec<i64>,
}

/// Static genre ID → name mapping, partitioned by media type.
#[derive(Debug, Clone)]
pub struct GenreTable {
    movie: HashMap<i64, String>,
    tv: HashMap<i64, String>,
}

impl Default for GenreTable {
    /// Table with TMDB's published English genre lists.
    fn default() -> Self {
        Self::new(to_map(MOVIE_GENRES), to_map(TV_GENRES))
    }
}

impl GenreTable {
    /// Create a table from explicit maps.
    pub fn new(movie: HashMap<i64, String>, tv: HashMap<i64, String>) -> Self {
        Self { movie, tv }
    }

    fn map_for(&self, media_type: MediaType) -> &HashMap<i64, String> {
        match media_type {
            MediaType::Movie => &self.movie,
            MediaType::Series => &self.tv,
        }
    }

    /// Look up a single genre name.
    pub fn name(&self, id: i64, media_type: MediaType) -> Option<&str> {
        self.map_for(media_type).get(&id).map(String::as_str)
    }

    /// Resolve IDs to names. Unknown IDs are collected, never fatal.
    pub fn resolve(&self, ids: &[i64], media_type: MediaType) -> GenreResolution {
        let mut resolution = GenreResolution::default();

        for &id in ids {
            match self.name(id, media_type) {
                Some(name) => resolution.names.push(name.to_string()),
                None => resolution.unknown.push(id),
            }
        }

        resolution
    }
}

fn to_map(entries: &[(i64, &str)]) -> HashMap<i64, String> {
    entries
        .iter()
        .map(|(id, name)| (*id, name.to_string()))
        .collect()
}
