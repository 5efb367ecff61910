//! RPC error taxonomy.

use thiserror::Error;

/// Errors surfaced by the retrying fetch primitive.
///
/// Transient conditions (5xx, timeouts, transport failures, 429) are retried
/// internally and only appear here as [`RpcError::Exhausted`] once the retry
/// budget is spent. 404 is not an error at all: it is the defined absent
/// signal and surfaces as `Ok(None)` from every [`crate::NodeClient`] method.
#[derive(Debug, Clone, Error)]
pub enum RpcError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to construct HTTP client: {reason}")]
    ClientBuild {
        /// Builder error description
        reason: String,
    },

    /// Retryable failures exhausted the configured budget.
    #[error("giving up on {url} after {attempts} attempts over {elapsed_ms}ms: {last_error}")]
    Exhausted {
        /// Request URL
        url: String,
        /// Attempts actually issued
        attempts: u32,
        /// Wall-clock time spent across all attempts
        elapsed_ms: u64,
        /// Last observed underlying error
        last_error: String,
    },

    /// A 4xx other than 404/429: the request itself is wrong, retrying
    /// cannot help.
    #[error("non-retryable HTTP status {status} from {url}")]
    NonRetryable {
        /// HTTP status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// The response arrived but did not match the expected shape.
    #[error("malformed response from {url}: {reason}")]
    InvalidResponse {
        /// Request URL
        url: String,
        /// What was wrong with the body
        reason: String,
    },
}

impl RpcError {
    /// Whether this error means the request itself was rejected (as opposed
    /// to the network giving out). Pagination walks treat these as
    /// end-of-data rather than failures.
    pub fn is_non_retryable(&self) -> bool {
        matches!(self, RpcError::NonRetryable { .. })
    }
}
