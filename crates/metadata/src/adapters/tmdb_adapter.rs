//! TMDB metadata provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use domain::MediaType;
use tmdb::{ListPage, TmdbClient};

use crate::{ListedRecord, MediaProvider, ProviderError, RawRecord};

/// TMDB metadata provider
pub struct TmdbProvider {
    client: Arc<TmdbClient>,
}

impl TmdbProvider {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaProvider for TmdbProvider {
    async fn fetch_popular(
        &self,
        media_type: MediaType,
    ) -> Result<Vec<ListedRecord>, ProviderError> {
        let records = match media_type {
            MediaType::Movie => listed(self.client.get_popular_movies().await?),
            MediaType::Series => listed(self.client.get_popular_tv().await?),
        };

        Ok(records)
    }

    async fn fetch_details(
        &self,
        tmdb_id: i64,
        media_type: MediaType,
        language: Option<&str>,
    ) -> Result<RawRecord, ProviderError> {
        let record = match media_type {
            MediaType::Movie => self.client.get_movie(tmdb_id, language).await?.into(),
            MediaType::Series => self.client.get_tv_details(tmdb_id, language).await?.into(),
        };

        Ok(record)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

fn listed<T: Into<RawRecord>>(page: ListPage<T>) -> Vec<ListedRecord> {
    page.results
        .into_iter()
        .map(|item| item.map(Into::into).map_err(ProviderError::from))
        .collect()
}
