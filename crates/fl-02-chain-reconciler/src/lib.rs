//! # FL-02 Chain-State Reconciler
//!
//! Reconciles the locally known freeze list with the authoritative on-chain
//! registry.
//!
//! ## Purpose
//!
//! The on-chain program stores the freeze list in a mapping keyed by dense
//! slot indices and commits to it with a Merkle root. This subsystem walks
//! the mapping slot by slot until the first gap, reads the published roots,
//! and rebuilds the tree locally to prove the snapshot is consistent - a
//! root mismatch means a concurrent on-chain update raced the walk, and the
//! only correct response is a re-fetch.
//!
//! ## Module Structure
//!
//! ```text
//! fl-02-chain-reconciler/
//! ├── domain/          # FreezeListSnapshot, error taxonomy
//! ├── application/     # ReconcilerService orchestrating the walk
//! └── config.rs        # ReconcilerConfig (program id, mapping names, bounds)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;

pub use application::{ReconcilerService, VerifiedSnapshot};
pub use config::ReconcilerConfig;
pub use domain::{FreezeListSnapshot, ReconcilerError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
