//! # Frost Telemetry
//!
//! One-call tracing setup for applications embedding the Frostline crates.
//!
//! The workspace libraries only emit through the `tracing` macros; wiring a
//! subscriber is the embedder's choice. This crate offers the standard one:
//! an env-filtered fmt subscriber.
//!
//! ```rust,ignore
//! use frost_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("telemetry init");
//!     // Frostline services now log through the global subscriber.
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Telemetry initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log-level directive did not parse as an env filter.
    #[error("invalid log filter {directive:?}: {reason}")]
    InvalidFilter {
        /// The offending directive
        directive: String,
        /// Parser error
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global fmt subscriber described by `config`.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
            directive: config.log_level.clone(),
            reason: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
