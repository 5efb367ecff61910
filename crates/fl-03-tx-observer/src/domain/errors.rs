//! # Domain Errors
//!
//! Error types for transaction observation.

use shared_rpc::RpcError;
use thiserror::Error;

/// Observer error types.
///
/// A spent budget means the *observation* failed, not the transaction: its
/// outcome is unknown and the caller may resume watching with a fresh
/// budget.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// The wall-clock budget ran out before a terminal status appeared.
    #[error("polling for {tx_id} timed out after {elapsed_ms}ms ({attempts} attempts)")]
    PollTimeout {
        /// Observed transaction id
        tx_id: String,
        /// Status checks issued
        attempts: u32,
        /// Wall-clock time spent
        elapsed_ms: u64,
        /// Last underlying error, if any poll failed
        last_error: Option<String>,
    },

    /// The attempt budget ran out before a terminal status appeared.
    #[error("polling for {tx_id} exhausted {attempts} attempts over {elapsed_ms}ms")]
    PollExhausted {
        /// Observed transaction id
        tx_id: String,
        /// Status checks issued
        attempts: u32,
        /// Wall-clock time spent
        elapsed_ms: u64,
        /// Last underlying error, if any poll failed
        last_error: Option<String>,
    },

    /// A single-shot status check hit a fetch failure.
    #[error("status check failed: {0}")]
    Rpc(#[from] RpcError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_carries_budget_context() {
        let err = ObserverError::PollTimeout {
            tx_id: "at1xyz".to_string(),
            attempts: 12,
            elapsed_ms: 90_000,
            last_error: Some("server error 503".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("at1xyz"));
        assert!(msg.contains("12 attempts"));
        assert!(msg.contains("90000ms"));
    }
}
