use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_results: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Error object TMDB returns for invalid keys, unknown IDs, etc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: i64,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub success: Option<bool>,
}

/// A list page whose `results` were decoded item by item.
///
/// Each entry is the decoded item or the error that item alone produced.
#[derive(Debug)]
pub struct ListPage<T> {
    pub page: i64,
    pub results: Vec<crate::Result<T>>,
}

// ============ Movie ============

/// A movie as returned by `/movie/popular` (with `genre_ids`) or
/// `/movie/{id}` (with expanded `genres`).
///
/// Only the fields the catalog stores are declared; every one of them but
/// `id` and `title` tolerates `null` or absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
}

// ============ TV Show ============

/// A TV show as returned by `/tv/popular` (with `genre_ids`) or
/// `/tv/{id}` (with expanded `genres`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TvShow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_list_item_shape() {
        let json = r#"{
            "id": 1061474,
            "title": "Superman",
            "release_date": "2025-07-11",
            "poster_path": "/poster.jpg",
            "genre_ids": [28, 878],
            "popularity": 512.3
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 1061474);
        assert_eq!(movie.genre_ids, Some(vec![28, 878]));
        assert!(movie.genres.is_none());
    }

    #[test]
    fn test_tv_detail_shape() {
        let json = r#"{
            "id": 1399,
            "name": "Game of Thrones",
            "first_air_date": "2011-04-17",
            "genres": [{"id": 18, "name": "Drama"}]
        }"#;
        let show: TvShow = serde_json::from_str(json).unwrap();
        assert_eq!(show.name, "Game of Thrones");
        assert!(show.genre_ids.is_none());
        assert_eq!(
            show.genres,
            Some(vec![Genre {
                id: 18,
                name: "Drama".to_string()
            }])
        );
    }

    #[test]
    fn test_unused_provider_fields_may_be_null() {
        let json = r#"{
            "id": 2,
            "title": "Sparse",
            "popularity": null,
            "vote_average": null,
            "adult": null,
            "origin_country": null
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Sparse");
    }

    #[test]
    fn test_null_poster_path() {
        let json = r#"{"id": 1, "title": "No Poster", "poster_path": null}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(movie.poster_path.is_none());
    }
}
