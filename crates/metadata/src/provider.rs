//! Metadata provider trait definition

use async_trait::async_trait;
use domain::MediaType;

use crate::{ProviderError, RawRecord};

/// One entry of a popular listing: the record, or why that entry alone
/// could not be read.
pub type ListedRecord = Result<RawRecord, ProviderError>;

/// Source of popular-media listings and single-item details.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Fetch the first page of popular items for a media type.
    ///
    /// The outer error fails the whole listing; an inner error affects only
    /// its own entry.
    async fn fetch_popular(&self, media_type: MediaType)
        -> Result<Vec<ListedRecord>, ProviderError>;

    /// Fetch a single item with expanded genres.
    ///
    /// `language` falls back to the provider's default when `None`.
    async fn fetch_details(
        &self,
        tmdb_id: i64,
        media_type: MediaType,
        language: Option<&str>,
    ) -> Result<RawRecord, ProviderError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
