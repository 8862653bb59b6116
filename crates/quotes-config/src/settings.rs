//! Configuration structures.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub remote: RemoteSettings,
    #[serde(default)]
    pub sync: SyncSettings,
}

impl AppConfig {
    /// Reject values the rest of the system cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: &str| Err(ConfigError::Message(msg.to_string()));

        if self.remote.endpoint.trim().is_empty() {
            return fail("remote.endpoint must not be empty");
        }
        if self.remote.timeout_ms == 0 {
            return fail("remote.timeout_ms must be greater than zero");
        }
        if self.remote.max_items == 0 {
            return fail("remote.max_items must be greater than zero");
        }
        if self.remote.origin_category.trim().is_empty() {
            return fail("remote.origin_category must not be empty");
        }
        if self.sync.interval_secs == 0 {
            return fail("sync.interval_secs must be greater than zero");
        }
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quote-sync".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Optional log file, rotated daily
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Where the collection lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub data_dir: String,
    pub quotes_file: String,
    pub last_viewed_file: String,
}

impl StorageSettings {
    pub fn quotes_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.quotes_file)
    }

    pub fn last_viewed_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.last_viewed_file)
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            quotes_file: "quotes.json".to_string(),
            last_viewed_file: "last_quote.json".to_string(),
        }
    }
}

/// Remote endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub max_items: usize,
    pub origin_category: String,
}

impl RemoteSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://jsonplaceholder.typicode.com/posts".to_string(),
            timeout_ms: 5000,
            max_items: 5,
            origin_category: "Server".to_string(),
        }
    }
}

/// Periodic sync settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub interval_secs: u64,
    /// Run one pass as soon as `watch` starts
    pub sync_on_start: bool,
}

impl SyncSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            sync_on_start: true,
        }
    }
}
