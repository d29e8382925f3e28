use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TmdbError;
use crate::models::{ErrorResponse, ListPage, PaginatedResponse};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default language for list and detail requests.
pub const DEFAULT_LANGUAGE: &str = "en-US";

pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client.
    ///
    /// Request timeouts are whatever the given `Client` was built with.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Point the client at another API root (e.g. `http://127.0.0.1:8080/3`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the default language sent with every request.
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET against `path` with the credential and language attached.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        language: &str,
        extra: &[(&str, &str)],
    ) -> crate::Result<T> {
        let url = self.url(path);

        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", language)])
            .query(extra)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// GET a paginated list in the client's language.
    ///
    /// The page itself must be well formed, but `results` are decoded one by
    /// one so a malformed entry does not take its neighbours down with it.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> crate::Result<ListPage<T>> {
        let page: PaginatedResponse<Value> = self.get(path, &self.lang, extra).await?;

        let results = page
            .results
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                decode(item).map_err(|e| match e {
                    TmdbError::Json { path, source } => TmdbError::Json {
                        path: match path.as_str() {
                            "." => format!("results[{}]", index),
                            _ => format!("results[{}].{}", index, path),
                        },
                        source,
                    },
                    other => other,
                })
            })
            .collect();

        Ok(ListPage {
            page: page.page,
            results,
        })
    }

    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.status_message)
                .unwrap_or(body);
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;

        // TMDB reports some failures with a 200 and an error object
        if value.get("status_code").is_some() {
            let error: ErrorResponse = serde_json::from_value(value)?;
            return Err(TmdbError::Provider {
                code: error.status_code,
                message: error.status_message,
            });
        }

        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| TmdbError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
