//! Configuration management with TOML and CLI overrides.
//!
//! Only the two lookup deadlines are configurable. The endpoint and request
//! headers are fixed. A config file is opt-in: it is read from `--config` or
//! from the user's `wb-lookup` config directory, never from the working directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Deadline for the whole fetch-and-decode operation in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Deadline for the underlying HTTP call in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    15_000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self { timeout_ms: default_timeout_ms(), request_timeout_ms: default_request_timeout_ms() }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads deadlines from a TOML file; keys it omits keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Deadlines from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Loads the explicit file if given, else the user config file if present,
    /// else the defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match explicit_path.map(Path::to_path_buf).or_else(user_config_path) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using default deadlines");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides; `None` keeps the loaded value.
    pub fn with_overrides(
        mut self,
        timeout_ms: Option<u64>,
        request_timeout_ms: Option<u64>,
    ) -> Self {
        if let Some(ms) = timeout_ms {
            self.timeout_ms = ms;
        }
        if let Some(ms) = request_timeout_ms {
            self.request_timeout_ms = ms;
        }
        self
    }

    /// Returns the two deadlines as durations.
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            overall: Duration::from_millis(self.timeout_ms),
            request: Duration::from_millis(self.request_timeout_ms),
        }
    }
}

/// `<config dir>/wb-lookup/config.toml`, when it exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("wb-lookup").join("config.toml"))
        .filter(|path| path.exists())
}

/// The two independent deadlines bounding a lookup.
///
/// `overall` wraps fetch and decode together; `request` is enforced by the HTTP
/// client on the network call alone. Whichever elapses first aborts the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub overall: Duration,
    pub request: Duration,
}

impl Timeouts {
    /// The bound a caller can actually observe.
    pub fn effective(&self) -> Duration {
        self.overall.min(self.request)
    }
}
