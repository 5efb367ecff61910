//! # Clock Port
//!
//! Time as a dependency, so the polling loop can run against virtual time
//! in tests instead of sleeping for real.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;

/// Time source and sleeper - outbound port.
#[async_trait]
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;

    /// Suspend for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Real time via the tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Virtual time for tests: `sleep` advances the clock instantly.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    advanced: Mutex<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a clock starting at the real current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            advanced: Mutex::new(Duration::ZERO),
        }
    }

    /// Move time forward.
    pub fn advance(&self, duration: Duration) {
        let mut advanced = self
            .advanced
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *advanced += duration;
    }

    /// Total virtual time elapsed since construction.
    pub fn elapsed(&self) -> Duration {
        *self
            .advanced
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
