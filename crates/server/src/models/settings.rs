use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_INTERVAL_HOURS: u64 = 24 * 365;

/// Application settings stored in TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// TMDB client configuration
    #[serde(default)]
    pub tmdb: TmdbSettings,
    /// Periodic sync configuration
    #[serde(default)]
    pub sync: SyncSettings,
    /// Admin endpoint access
    #[serde(default)]
    pub admin: AdminSettings,
}

/// TMDB client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbSettings {
    /// API key sent with every request
    #[serde(default)]
    pub api_key: String,
    /// Language for popular listings
    #[serde(default = "TmdbSettings::default_language")]
    pub language: String,
    /// Language for detail lookups during genre backfill
    #[serde(default = "TmdbSettings::default_language")]
    pub detail_language: String,
    /// Per-request timeout in seconds
    #[serde(default = "TmdbSettings::default_timeout_secs")]
    pub timeout_secs: u64,
    /// API root override, e.g. for a caching proxy
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: Self::default_language(),
            detail_language: Self::default_language(),
            timeout_secs: Self::default_timeout_secs(),
            base_url: None,
        }
    }
}

impl TmdbSettings {
    fn default_language() -> String {
        tmdb::DEFAULT_LANGUAGE.to_string()
    }

    fn default_timeout_secs() -> u64 {
        10
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Periodic sync configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Run the full sync on a timer
    #[serde(default = "SyncSettings::default_enabled")]
    pub enabled: bool,
    /// Hours between scheduled runs
    #[serde(default = "SyncSettings::default_interval_hours")]
    pub interval_hours: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            interval_hours: Self::default_interval_hours(),
        }
    }
}

impl SyncSettings {
    fn default_enabled() -> bool {
        true
    }

    fn default_interval_hours() -> u64 {
        24
    }

    /// Scheduling period, clamped to between one hour and one year.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_hours.clamp(1, MAX_INTERVAL_HOURS) * 60 * 60)
    }
}

/// Admin endpoint access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Bearer token for `/api/admin/*`. Admin routes are closed when unset.
    #[serde(default)]
    pub token: Option<String>,
    /// Name recorded as the actor of admin-triggered runs
    #[serde(default = "AdminSettings::default_username")]
    pub username: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            token: None,
            username: Self::default_username(),
        }
    }
}

impl AdminSettings {
    fn default_username() -> String {
        "admin".to_string()
    }
}
