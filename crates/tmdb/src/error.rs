use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    /// Error object returned in a successful HTTP response.
    #[error("TMDB error {code}: {message}")]
    Provider { code: i64, message: String },
}

impl TmdbError {
    /// Whether the underlying request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TmdbError::Request(e) if e.is_timeout())
    }
}

impl From<serde_json::Error> for TmdbError {
    fn from(source: serde_json::Error) -> Self {
        TmdbError::Json {
            path: String::from("."),
            source,
        }
    }
}
