use domain::{MediaRecord, MediaType, SampleOrder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::SyncReport;

/// Number of records returned by the refresh endpoints.
pub const DEFAULT_SAMPLE_LIMIT: u32 = 8;
/// Upper bound for `limit` on sample queries.
pub const MAX_SAMPLE_LIMIT: u32 = 50;

/// Response envelope shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload of the refresh endpoints, keyed `movies` or `tvshows`
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RefreshData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<MediaRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvshows: Option<Vec<MediaRecord>>,
}

impl RefreshData {
    pub fn new(media_type: MediaType, records: Vec<MediaRecord>) -> Self {
        match media_type {
            MediaType::Movie => Self {
                movies: Some(records),
                tvshows: None,
            },
            MediaType::Series => Self {
                movies: None,
                tvshows: Some(records),
            },
        }
    }
}

/// Query parameters for sampling stored media
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SampleQuery {
    /// `random` (default) or `latest`
    pub order: Option<SampleOrder>,
    /// Maximum number of records (default: 8, max: 50)
    pub limit: Option<u32>,
}

impl SampleQuery {
    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_SAMPLE_LIMIT)
            .clamp(1, MAX_SAMPLE_LIMIT)
    }

    pub fn order(&self) -> SampleOrder {
        self.order.unwrap_or_default()
    }
}

/// Result of a manual "sync now"
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResponse {
    /// Human-readable one-line summary for the admin notice
    pub summary: String,
    pub report: SyncReport,
}
