use thiserror::Error;

/// Failure of a single provider call.
///
/// None of these are fatal to a sync run: callers log them and move on to
/// the next media type or record.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or HTTP layer unreachable.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Payload was not valid JSON or did not have the expected shape.
    #[error("Decode failure at '{path}': {message}")]
    Decode { path: String, message: String },

    /// The provider answered with an error status.
    #[error("Provider error {code}: {message}")]
    Provider { code: i64, message: String },
}

impl From<tmdb::TmdbError> for ProviderError {
    fn from(err: tmdb::TmdbError) -> Self {
        if err.is_timeout() {
            return ProviderError::Timeout(err.to_string());
        }

        match err {
            tmdb::TmdbError::Request(e) => ProviderError::Transport(e.to_string()),
            tmdb::TmdbError::Json { path, source } => ProviderError::Decode {
                path,
                message: source.to_string(),
            },
            tmdb::TmdbError::Api {
                status_code,
                message,
            } => ProviderError::Provider {
                code: i64::from(status_code),
                message,
            },
            tmdb::TmdbError::Provider { code, message } => {
                ProviderError::Provider { code, message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmdb::TmdbError;

    #[test]
    fn test_json_error_maps_to_decode() {
        let source = serde_json::from_str::<i64>("\"x\"").unwrap_err();
        let err = ProviderError::from(TmdbError::Json {
            path: "results[3].title".to_string(),
            source,
        });

        match err {
            ProviderError::Decode { path, .. } => assert_eq!(path, "results[3].title"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_status_maps_to_provider() {
        let err = ProviderError::from(TmdbError::Api {
            status_code: 401,
            message: "Invalid API key".to_string(),
        });

        assert!(matches!(err, ProviderError::Provider { code: 401, .. }));
    }

    #[test]
    fn test_error_payload_maps_to_provider() {
        let err = ProviderError::from(TmdbError::Provider {
            code: 34,
            message: "Not found".to_string(),
        });

        match err {
            ProviderError::Provider { code, message } => {
                assert_eq!(code, 34);
                assert_eq!(message, "Not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
