use std::sync::Arc;

use chrono::NaiveDate;
use domain::{CreateMediaError, GenreTable, UpsertMediaRequest};

use crate::RawRecord;

/// Maps raw provider records into canonical upsert requests.
///
/// The same mapping is used for list items and detail payloads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    genres: Arc<GenreTable>,
}

impl Normalizer {
    pub fn new(genres: Arc<GenreTable>) -> Self {
        Self { genres }
    }

    /// Normalize a raw record. The media type comes from the record's variant.
    pub fn normalize(&self, raw: &RawRecord) -> Result<UpsertMediaRequest, CreateMediaError> {
        let request = UpsertMediaRequest::new(raw.tmdb_id(), raw.title(), raw.media_type())?
            .with_poster_path(raw.poster_path().unwrap_or_default())
            .with_release_date(raw.date().and_then(parse_release_date))
            .with_genres(self.genre_names(raw));

        Ok(request)
    }

    /// Genre names from an expanded `genres` list only.
    ///
    /// Returns an empty list when the record carries no `genres` field.
    pub fn expanded_genres(&self, raw: &RawRecord) -> Vec<String> {
        raw.genres()
            .map(|genres| genres.iter().map(|g| g.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Expanded `genres` win over `genre_ids`; neither yields an empty list.
    fn genre_names(&self, raw: &RawRecord) -> Vec<String> {
        if raw.genres().is_some() {
            return self.expanded_genres(raw);
        }

        let Some(ids) = raw.genre_ids() else {
            return Vec::new();
        };

        let resolution = self.genres.resolve(ids, raw.media_type());
        for id in &resolution.unknown {
            tracing::warn!(
                tmdb_id = raw.tmdb_id(),
                media_type = %raw.media_type(),
                genre_id = id,
                "Unknown genre ID, skipping"
            );
        }
        resolution.names
    }
}

/// Parse a TMDB date (`YYYY-MM-DD`). Empty or malformed values yield `None`.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("Ignoring malformed release date '{}': {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::MediaType;
    use tmdb::{Genre, Movie, TvShow};

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(GenreTable::default()))
    }

    fn genre(id: i64, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_superman_list_item() {
        let raw = RawRecord::Movie(Movie {
            id: 1061474,
            title: "Superman".to_string(),
            release_date: Some("2025-07-11".to_string()),
            genre_ids: Some(vec![28, 878]),
            ..Default::default()
        });

        let request = normalizer().normalize(&raw).unwrap();
        assert_eq!(request.tmdb_id, 1061474);
        assert_eq!(request.title, "Superman");
        assert_eq!(
            request.release_date,
            NaiveDate::from_ymd_opt(2025, 7, 11)
        );
        assert_eq!(request.genres, "Action, Science Fiction");
        assert_eq!(request.media_type, MediaType::Movie);
        assert_eq!(request.poster_path, "");
    }

    #[test]
    fn test_series_uses_name_and_first_air_date() {
        let raw = RawRecord::Series(TvShow {
            id: 1399,
            name: "Game of Thrones".to_string(),
            first_air_date: Some("2011-04-17".to_string()),
            poster_path: Some("/got.jpg".to_string()),
            genre_ids: Some(vec![10765, 18]),
            ..Default::default()
        });

        let request = normalizer().normalize(&raw).unwrap();
        assert_eq!(request.title, "Game of Thrones");
        assert_eq!(request.release_date, NaiveDate::from_ymd_opt(2011, 4, 17));
        assert_eq!(request.poster_path, "/got.jpg");
        assert_eq!(request.genres, "Sci-Fi & Fantasy, Drama");
        assert_eq!(request.media_type, MediaType::Series);
    }

    #[test]
    fn test_missing_or_empty_date_is_none() {
        let missing = RawRecord::Movie(Movie {
            id: 1,
            title: "Undated".to_string(),
            ..Default::default()
        });
        let empty = RawRecord::Series(TvShow {
            id: 2,
            name: "Blank".to_string(),
            first_air_date: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(normalizer().normalize(&missing).unwrap().release_date, None);
        assert_eq!(normalizer().normalize(&empty).unwrap().release_date, None);
    }

    #[test]
    fn test_expanded_genres_win_over_ids() {
        let raw = RawRecord::Movie(Movie {
            id: 3,
            title: "Both".to_string(),
            genre_ids: Some(vec![28]),
            genres: Some(vec![genre(18, "Drama"), genre(80, "Crime")]),
            ..Default::default()
        });

        assert_eq!(normalizer().normalize(&raw).unwrap().genres, "Drama, Crime");
    }

    #[test]
    fn test_no_genre_fields_is_empty() {
        let raw = RawRecord::Movie(Movie {
            id: 4,
            title: "Plain".to_string(),
            ..Default::default()
        });

        assert_eq!(normalizer().normalize(&raw).unwrap().genres, "");
    }

    #[test]
    fn test_movie_genre_id_under_series_is_skipped() {
        let raw = RawRecord::Series(TvShow {
            id: 5,
            name: "Crossed".to_string(),
            genre_ids: Some(vec![28, 18]),
            ..Default::default()
        });

        assert_eq!(normalizer().normalize(&raw).unwrap().genres, "Drama");
    }

    #[test]
    fn test_detail_and_list_shapes_agree() {
        let list = RawRecord::Movie(Movie {
            id: 6,
            title: "Same".to_string(),
            release_date: Some("2020-01-01".to_string()),
            genre_ids: Some(vec![18]),
            ..Default::default()
        });
        let detail = RawRecord::Movie(Movie {
            id: 6,
            title: "Same".to_string(),
            release_date: Some("2020-01-01".to_string()),
            genres: Some(vec![genre(18, "Drama")]),
            ..Default::default()
        });

        assert_eq!(
            normalizer().normalize(&list).unwrap(),
            normalizer().normalize(&detail).unwrap()
        );
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let raw = RawRecord::Movie(Movie {
            id: 7,
            title: String::new(),
            ..Default::default()
        });

        assert_eq!(
            normalizer().normalize(&raw),
            Err(CreateMediaError::EmptyTitle(7))
        );
    }

    #[test]
    fn test_expanded_genres_only_reads_genres() {
        let raw = RawRecord::Series(TvShow {
            id: 8,
            name: "Ids only".to_string(),
            genre_ids: Some(vec![18]),
            ..Default::default()
        });

        assert!(normalizer().expanded_genres(&raw).is_empty());
    }

    #[test]
    fn test_parse_release_date() {
        assert_eq!(
            parse_release_date("1999-03-31"),
            NaiveDate::from_ymd_opt(1999, 3, 31)
        );
        assert_eq!(parse_release_date("not-a-date"), None);
        assert_eq!(parse_release_date("  "), None);
    }
}
