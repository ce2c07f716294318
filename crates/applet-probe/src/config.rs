//! Bridge configuration.
//!
//! Loadable from YAML or JSON:
//!
//! ```yaml
//! object_id: calculatorApplet
//! user_agent_markers: [Firefox, Safari]
//! page_load_timeout_ms: 60000
//! start_url: http://localhost:8080/applet.html
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::result::{ProbeError, ProbeResult};

/// User agent substrings that select the window-scoped element accessor
pub const DEFAULT_USER_AGENT_MARKERS: [&str; 4] = ["Firefox", "MSIE", "Opera", "Safari"];

/// Default page load timeout in milliseconds
pub const DEFAULT_PAGE_LOAD_TIMEOUT_MS: u64 = 30_000;

/// Settings for a [`crate::bridge::JavaBridge`] session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Id of the page element hosting the applet
    pub object_id: String,
    /// User agent substrings that select `window.document` scoping
    pub user_agent_markers: Vec<String>,
    /// Timeout used when waiting for the start page
    pub page_load_timeout_ms: u64,
    /// Page opened as soon as the session starts
    pub start_url: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            object_id: String::new(),
            user_agent_markers: DEFAULT_USER_AGENT_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            page_load_timeout_ms: DEFAULT_PAGE_LOAD_TIMEOUT_MS,
            start_url: None,
        }
    }
}

impl BridgeConfig {
    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the applet element id
    #[must_use]
    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = object_id.into();
        self
    }

    /// Replace the user agent markers
    #[must_use]
    pub fn with_user_agent_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_agent_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page load timeout
    #[must_use]
    pub const fn with_page_load_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.page_load_timeout_ms = timeout_ms;
        self
    }

    /// Set the page opened on start
    #[must_use]
    pub fn with_start_url(mut self, url: impl Into<String>) -> Self {
        self.start_url = Some(url.into());
        self
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> ProbeResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(json: &str) -> ProbeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is read as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> ProbeResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ProbeResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check values that end up inside generated scripts.
    pub fn validate(&self) -> ProbeResult<()> {
        if self.object_id.contains('"') {
            return Err(ProbeError::config(format!(
                "object_id must not contain a double quote: {}",
                self.object_id
            )));
        }
        if self.user_agent_markers.iter().any(String::is_empty) {
            return Err(ProbeError::config("user_agent_markers must not contain empty entries"));
        }
        if self.start_url.as_deref().is_some_and(str::is_empty) {
            return Err(ProbeError::config("start_url must not be empty when set"));
        }
        Ok(())
    }
}
