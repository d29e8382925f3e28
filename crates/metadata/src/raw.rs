use domain::MediaType;
use tmdb::{Genre, Movie, TvShow};

/// A provider payload tagged with its shape.
///
/// Movies and series use different field names for the same concepts
/// (`title`/`name`, `release_date`/`first_air_date`). Both variants may carry
/// either `genre_ids` (list endpoints) or expanded `genres` (detail endpoints).
#[derive(Debug, Clone)]
pub enum RawRecord {
    Movie(Movie),
    Series(TvShow),
}

impl RawRecord {
    pub fn media_type(&self) -> MediaType {
        match self {
            RawRecord::Movie(_) => MediaType::Movie,
            RawRecord::Series(_) => MediaType::Series,
        }
    }

    pub fn tmdb_id(&self) -> i64 {
        match self {
            RawRecord::Movie(m) => m.id,
            RawRecord::Series(s) => s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            RawRecord::Movie(m) => &m.title,
            RawRecord::Series(s) => &s.name,
        }
    }

    /// `release_date` for movies, `first_air_date` for series.
    ///
    /// The field is fixed by the variant. A movie payload that only carries
    /// `first_air_date` has no date: `Movie` does not declare that field.
    pub fn date(&self) -> Option<&str> {
        match self {
            RawRecord::Movie(m) => m.release_date.as_deref(),
            RawRecord::Series(s) => s.first_air_date.as_deref(),
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            RawRecord::Movie(m) => m.poster_path.as_deref(),
            RawRecord::Series(s) => s.poster_path.as_deref(),
        }
    }

    pub fn genres(&self) -> Option<&[Genre]> {
        match self {
            RawRecord::Movie(m) => m.genres.as_deref(),
            RawRecord::Series(s) => s.genres.as_deref(),
        }
    }

    pub fn genre_ids(&self) -> Option<&[i64]> {
        match self {
            RawRecord::Movie(m) => m.genre_ids.as_deref(),
            RawRecord::Series(s) => s.genre_ids.as_deref(),
        }
    }
}

impl From<Movie> for RawRecord {
    fn from(movie: Movie) -> Self {
        RawRecord::Movie(movie)
    }
}

impl From<TvShow> for RawRecord {
    fn from(show: TvShow) -> Self {
        RawRecord::Series(show)
    }
}
