//! # Observer Configuration
//!
//! Polling cadence and the two independent budgets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Transaction observer configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Pause between status checks.
    pub poll_interval_ms: u64,

    /// Wall-clock budget for the whole observation, checked before each new
    /// attempt.
    pub timeout_ms: u64,

    /// Attempt-count budget, enforced independently of the timeout; the
    /// stricter budget wins.
    pub max_attempts: u32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2_000,
            timeout_ms: 90_000,
            max_attempts: 45,
        }
    }
}

impl ObserverConfig {
    /// Create a config for testing (tiny budgets).
    pub fn for_testing() -> Self {
        Self {
            poll_interval_ms: 1,
            timeout_ms: 250,
            max_attempts: 5,
        }
    }

    /// Poll interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Overall timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
