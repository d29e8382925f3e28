use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-level configuration, fixed at startup.
///
/// Tunable behaviour (API key, timeouts, sync interval) lives in
/// [`Settings`](crate::models::Settings), loaded from `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the database and settings file.
    pub data_path: PathBuf,
    pub max_connections: u32,
}

impl Config {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            max_connections: 5,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_path.join("media.db")
    }

    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.database_path().display())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_path.join("settings.toml")
    }
}
