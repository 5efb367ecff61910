//! # Backoff Computation
//!
//! Pure delay arithmetic for the retry loop: exponential backoff with
//! bounded uniform jitter, and `Retry-After` header parsing.
//!
//! Jitter draws from a caller-supplied RNG so tests can fix the outcome;
//! production call sites pass a fresh thread RNG.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::RetryConfig;

/// Fraction of the capped delay added as uniform jitter (upper bound).
const JITTER_FRACTION: f64 = 0.25;

/// Delay before retry number `attempt` (0-indexed).
///
/// `min(base * 2^attempt, max_delay)` plus uniform jitter in `[0, 25%]` of
/// that value, so the result always lies in `[d, 1.25 * d]`.
pub fn backoff_delay<R: Rng>(attempt: u32, config: &RetryConfig, rng: &mut R) -> Duration {
    let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
    let exponential = config.base_delay().saturating_mul(factor);
    let capped = exponential.min(config.max_delay());
    let jitter = capped.mul_f64(rng.gen_range(0.0..=JITTER_FRACTION));
    capped + jitter
}

/// Parse a `Retry-After` header value.
///
/// Accepts the delta-seconds form (`"5"` → exactly 5s) or an HTTP-date,
/// converted to an offset from `now`; dates in the past clamp to zero.
/// Returns `None` for unparseable values so the caller falls back to
/// exponential backoff.
pub fn parse_retry_after(value: &str, now: DateTime<Utc>) -> Option<Duration> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    let when = DateTime::parse_from_rfc2822(value).ok()?;
    match (when.with_timezone(&Utc) - now).to_std() {
        Ok(delta) => Some(delta),
        Err(_) => Some(Duration::ZERO),
    }
}
