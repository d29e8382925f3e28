//! Media type value object.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Kind of catalog entry. Immutable once a record has been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum MediaType {
    /// Feature film.
    #[serde(rename = "movie")]
    Movie,
    /// TV series.
    #[serde(rename = "tv", alias = "series")]
    Series,
}

/// Error when a media type string is not recognised.
#[derive(Debug, Clone, Error)]
#[error("Unknown media type: {0}")]
pub struct ParseMediaTypeError(pub String);

impl MediaType {
    /// All media types in sync order.
    pub const ALL: [MediaType; 2] = [MediaType::Movie, MediaType::Series];

    /// Stored and URL representation (`movie` / `tv`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "tv",
        }
    }

    /// Plural label used in API payloads and log lines.
    pub fn plural(&self) -> &'static str {
        match self {
            MediaType::Movie => "movies",
            MediaType::Series => "tvshows",
        }
    }
}

impl FromStr for MediaType {
    type Err = ParseMediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaType::Movie),
            "tv" | "series" | "tvshows" => Ok(MediaType::Series),
            _ => Err(ParseMediaTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_media_type() {
        assert_eq!("movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!("TV".parse::<MediaType>().unwrap(), MediaType::Series);
        assert_eq!("tvshows".parse::<MediaType>().unwrap(), MediaType::Series);
        assert!("person".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_serde_uses_storage_names() {
        assert_eq!(serde_json::to_string(&MediaType::Series).unwrap(), "\"tv\"");
        let parsed: MediaType = serde_json::from_str("\"series\"").unwrap();
        assert_eq!(parsed, MediaType::Series);
    }
}
