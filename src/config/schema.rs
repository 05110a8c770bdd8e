//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Question store used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://66c42bddb026f3cc6cee3aad.mockapi.io";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Where the question store lives.
    pub endpoint: EndpointConfig,
    /// Display settings.
    pub settings: Settings,
}

/// Question store location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL; `/questions` is appended.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output mode when no `--verbose`/`--quiet` flag is given.
    pub default_output: OutputMode,
}

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
}
