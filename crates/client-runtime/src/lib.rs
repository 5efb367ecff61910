//! # Frostline Client Runtime
//!
//! The composed proving flow. An embedder asks one question - "prove this
//! address is not frozen" - and this crate runs the whole pipeline:
//!
//! 1. Reconcile: fetch the freeze list and roots, rebuild the tree locally,
//!    and insist the rebuilt root matches the chain's (re-fetching on a
//!    race).
//! 2. Witness: locate the bracketing leaves for the address and derive both
//!    authentication paths, padded to the fixed verifier depth.
//! 3. Self-check: re-hash both paths against the verified root before
//!    handing anything out.
//!
//! The result plus the claimed root goes into the on-chain call; the
//! observer then tracks the submitted transaction to its terminal outcome.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;
mod errors;

pub use client::{FrostClient, ProvenNonInclusion};
pub use config::ClientConfig;
pub use errors::ClientError;

// Re-exported so embedders wire logging without naming the telemetry crate.
pub use frost_telemetry::{init_telemetry, TelemetryConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
