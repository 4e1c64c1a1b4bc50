use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote user directory endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://jsonplaceholder.typicode.com/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Resource path joined onto the base URL.
    #[serde(default = "default_users_path")]
    pub users_path: String,
}

/// Terminal screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between ticks (spinner frames, input polling) in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The terminal screen cannot share stdout with log output.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";
pub const DEFAULT_USERS_PATH: &str = "users";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_users_path() -> String {
    DEFAULT_USERS_PATH.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Log file used by the terminal screen when none is configured.
    pub fn default_file() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("userlist").join("userlist.log")
    }
}
