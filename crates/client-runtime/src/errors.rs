//! Client runtime error types.

use fl_01_merkle_registry::RegistryError;
use fl_02_chain_reconciler::ReconcilerError;
use fl_03_tx_observer::ObserverError;
use shared_rpc::RpcError;
use shared_types::FieldElement;
use thiserror::Error;

/// Errors from the composed proving flow.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Reconciliation against the chain failed.
    #[error(transparent)]
    Reconciler(#[from] ReconcilerError),

    /// Local tree or witness construction failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Transaction observation failed.
    #[error(transparent)]
    Observer(#[from] ObserverError),

    /// The underlying HTTP client could not be constructed.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The address is on the freeze list: no non-inclusion witness exists,
    /// and the on-chain program would reject the call anyway.
    #[error("address {address} is on the freeze list")]
    AddressFrozen {
        /// The frozen address
        address: String,
    },

    /// A freshly derived witness failed to re-hash to the verified root.
    /// Indicates an internal inconsistency, never valid input.
    #[error("witness self-check failed against root {root}")]
    WitnessSelfCheck {
        /// The root the witness should have reproduced
        root: FieldElement,
    },
}
