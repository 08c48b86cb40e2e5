//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy and base path.
    pub history: HistoryConfig,

    /// Path matching options.
    pub matching: MatchingConfig,

    /// Lazy view loading.
    pub loading: LoadingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Per-route enable/disable overrides.
    pub features: Vec<FeatureFlag>,
}

/// History strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Address-bar history with back/forward and a base path.
    #[default]
    Web,
    /// In-process history, no base path.
    Memory,
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,

    /// Base path the app is served under (web mode only), e.g. "/app".
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Web,
            base: "/".to_string(),
        }
    }
}

/// Path matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Reject a trailing slash the pattern does not have.
    pub strict: bool,
}

/// Lazy view loading configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Maximum time a lazy view may take to load, in milliseconds.
    pub timeout_ms: u64,
}

impl LoadingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { timeout_ms: 10_000 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (trace, debug, info, warn, error, or directives).
    pub log_level: String,

    pub log_format: LogFormat,

    /// Record navigation and lazy-load metrics.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
        }
    }
}

/// Enable or disable a defined route by name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureFlag {
    /// Route name, e.g. "about".
    pub route: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}
