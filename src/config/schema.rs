//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Verb vocabulary (e.g., `["GET", "POST"]`). Empty means unconstrained.
    pub verbs: Vec<String>,

    /// Reject dispatch for verbs outside the vocabulary.
    pub strict_verbs: bool,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Benchmark driver settings.
    pub bench: BenchConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            verbs: vec!["GET".to_string(), "POST".to_string()],
            strict_verbs: false,
            observability: ObservabilityConfig::default(),
            bench: BenchConfig::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Benchmark driver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of rebuild-and-route iterations.
    pub iterations: u64,

    /// RNG seed for request selection. Random when absent.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
        }
    }
}
