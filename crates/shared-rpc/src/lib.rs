//! # Shared RPC - Resilient Node Access
//!
//! The one HTTP fetch primitive every networked subsystem goes through, plus
//! the narrow read-only API the node exposes.
//!
//! ## Module Structure
//!
//! ```text
//! shared-rpc/
//! ├── client.rs    # NodeClient port (five endpoints) + path builders
//! ├── http.rs      # reqwest adapter with retry/backoff/Retry-After
//! ├── mock.rs      # scripted in-memory client for tests
//! ├── backoff.rs   # delay computation and Retry-After parsing
//! ├── types.rs     # wire DTOs and body normalization
//! ├── config.rs    # RetryConfig
//! └── error.rs     # RpcError taxonomy
//! ```
//!
//! ## Retry discipline
//!
//! - 404 is data, not an error: it surfaces as `Ok(None)` (end-of-list for
//!   mapping walks, "not yet confirmed" for transaction polls) and is never
//!   retried here
//! - 429 is retried with the server's `Retry-After` when present, otherwise
//!   exponential backoff
//! - other 4xx fail immediately; 5xx, timeouts, and transport errors retry
//!   up to the configured budget, then surface the last observed error with
//!   attempt count and elapsed time

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backoff;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod types;

pub use backoff::{backoff_delay, parse_retry_after};
pub use client::{
    block_path, confirmed_path, find_block_hash_path, mapping_path, unconfirmed_path, NodeClient,
};
pub use config::RetryConfig;
pub use error::RpcError;
pub use http::HttpNodeClient;
pub use mock::{MockNodeClient, MockReply};
pub use types::{normalize_body, ConfirmedTransaction, UnconfirmedTransaction};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
