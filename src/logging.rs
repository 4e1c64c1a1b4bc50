//! Tracing subscriber setup.
//!
//! The terminal screen owns stdout, so interactive runs log to a file.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// Picks the destination: an explicit file wins, then the configured
    /// file; otherwise interactive runs use the default log file and plain
    /// runs use stderr.
    pub fn resolve(config: &LoggingConfig, explicit: Option<&Path>, interactive: bool) -> Self {
        match explicit.map(Path::to_path_buf).or_else(|| config.file.clone()) {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::File(LoggingConfig::default_file()),
            None => LogTarget::Stderr,
        }
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. A subscriber that is already installed is
/// left in place.
pub fn init_tracing(config: &LoggingConfig, target: &LogTarget) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    let installed = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(?target, "Tracing initialised");
    }
    Ok(())
}
