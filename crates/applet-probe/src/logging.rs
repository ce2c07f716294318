//! Optional `tracing` subscriber setup.
//!
//! The library only emits events; installing a subscriber is left to the test
//! binary. [`init_logging`] is a convenience for that:
//!
//! ```rust,no_run
//! use applet_probe::logging::{init_logging, LogConfig, LogFormat};
//!
//! init_logging(&LogConfig::new().with_filter("applet_probe=debug").with_format(LogFormat::Json));
//! tracing::info!("suite started");
//! ```
//!
//! `RUST_LOG` wins over the configured filter when set.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::result::{ProbeError, ProbeResult};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Output format
    pub format: LogFormat,
    /// Colour output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Create default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback filter directive
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Toggle colour output
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    fn env_filter(&self) -> ProbeResult<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.filter))
            .map_err(|e| ProbeError::config(format!("invalid log filter {:?}: {e}", self.filter)))
    }
}

/// Install a global subscriber; fails if one is already set or the filter is invalid.
pub fn try_init_logging(config: &LogConfig) -> ProbeResult<()> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);
    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| ProbeError::config(format!("logging already initialised: {e}")))
}

/// Install a global subscriber, reporting rather than failing when one exists.
pub fn init_logging(config: &LogConfig) {
    if let Err(e) = try_init_logging(config) {
        tracing::debug!(error = %e, "logging not initialised");
    }
}
