//! Media repository trait.
//!
//! Defines the abstract interface for media persistence operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{MediaRecord, MediaType, UpsertMediaRequest};
use crate::error::DomainResult;

/// Ordering for [`MediaRepository::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SampleOrder {
    /// Unordered random subset.
    #[default]
    Random,
    /// Most recently inserted first.
    Latest,
}

impl SampleOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleOrder::Random => "random",
            SampleOrder::Latest => "latest",
        }
    }
}

/// Media repository trait.
///
/// Concrete implementations are provided in the infrastructure layer.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Insert or update a record keyed by its TMDB ID.
    ///
    /// Returns the local ID, which is stable across updates. Must be a single
    /// atomic statement so concurrent callers for the same TMDB ID never
    /// produce a duplicate-key error.
    async fn upsert(&self, request: &UpsertMediaRequest) -> DomainResult<i64>;

    /// Replace only the genre text of a record.
    ///
    /// Returns true if the record was updated, false if not found.
    async fn update_genres(&self, id: i64, genres: &str) -> DomainResult<bool>;

    /// Find all records whose genre text is null or empty.
    async fn find_missing_genres(&self) -> DomainResult<Vec<MediaRecord>>;

    /// Find a record by its TMDB ID.
    async fn find_by_tmdb_id(&self, tmdb_id: i64) -> DomainResult<Option<MediaRecord>>;

    /// Return at most `limit` records of the given type.
    ///
    /// Never pads: a type with fewer rows than `limit` returns what exists.
    async fn sample(
        &self,
        media_type: MediaType,
        limit: u32,
        order: SampleOrder,
    ) -> DomainResult<Vec<MediaRecord>>;

    /// Count records of the given type.
    async fn count(&self, media_type: MediaType) -> DomainResult<i64>;
}
