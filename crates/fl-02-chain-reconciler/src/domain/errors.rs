//! # Domain Errors
//!
//! Error types for chain-state reconciliation.

use fl_01_merkle_registry::RegistryError;
use shared_rpc::RpcError;
use shared_types::{CodecError, FieldElement};
use thiserror::Error;

/// Reconciler error types.
#[derive(Debug, Error)]
pub enum ReconcilerError {
    /// The node could not be reached within the retry budget, or answered
    /// with something unusable.
    #[error("rpc failure during reconciliation: {0}")]
    Rpc(#[from] RpcError),

    /// An on-chain value failed to decode as an address or field element.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The fetched list violated a tree invariant when rebuilt.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The root mapping has no current root.
    #[error("on-chain root missing from mapping {mapping}")]
    MissingRoot {
        /// Root mapping name
        mapping: String,
    },

    /// The locally rebuilt root disagrees with the on-chain root even after
    /// re-fetching: a concurrent update kept racing the walk, or the local
    /// tree construction diverged from the program's. Never proceed past
    /// this silently.
    #[error("rebuilt root {local} does not match on-chain root {onchain} after {attempts} attempts")]
    RootMismatch {
        /// Root computed from the fetched list
        local: FieldElement,
        /// Root the chain published
        onchain: FieldElement,
        /// Fetch-rebuild-compare cycles attempted
        attempts: u32,
    },
}
