//! Application services for chain-state reconciliation.

pub mod service;

pub use service::{ReconcilerService, VerifiedSnapshot};
