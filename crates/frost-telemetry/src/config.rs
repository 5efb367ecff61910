//! # Telemetry Configuration

use serde::{Deserialize, Serialize};

/// Telemetry configuration.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `FROST_LOG_LEVEL` | `info` | Env-filter directive for log output |
/// | `FROST_SERVICE_NAME` | `frostline` | Service name stamped on events |
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Env-filter directive (`info`, `debug`, `fl_02_chain_reconciler=trace`, ...).
    pub log_level: String,

    /// Service name attached to the root span.
    pub service_name: String,

    /// Emit ANSI colors (off for piped output).
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service_name: "frostline".to_string(),
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    /// Build from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("FROST_LOG_LEVEL").unwrap_or(defaults.log_level),
            service_name: std::env::var("FROST_SERVICE_NAME").unwrap_or(defaults.service_name),
            ansi: defaults.ansi,
        }
    }

    /// Create a config for testing (quiet).
    pub fn for_testing() -> Self {
        Self {
            log_level: "warn".to_string(),
            ansi: false,
            ..Self::default()
        }
    }
}
