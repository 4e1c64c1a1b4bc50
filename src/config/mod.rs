mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    ApiConfig, Config, LoggingConfig, UiConfig, DEFAULT_BASE_URL, DEFAULT_USERS_PATH,
};
