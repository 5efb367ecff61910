//! # Retry Configuration
//!
//! Budget and pacing for the retrying fetch primitive. Passed explicitly to
//! each client constructor; there is no module-level default state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry and timeout configuration for node RPC calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the initial attempt (so `max_retries = 3` means up to
    /// four requests on the wire).
    pub max_retries: u32,

    /// Base backoff delay; attempt `i` waits `base * 2^i` before jitter.
    pub base_delay_ms: u64,

    /// Upper bound on the pre-jitter backoff delay.
    pub max_delay_ms: u64,

    /// Per-request timeout, independent of any caller-level polling budget.
    pub request_timeout_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            request_timeout_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Create a config for testing (tiny delays).
    pub fn for_testing() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 1,
            max_delay_ms: 5,
            request_timeout_ms: 250,
        }
    }

    /// Base backoff delay as a `Duration`.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Backoff cap as a `Duration`.
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
