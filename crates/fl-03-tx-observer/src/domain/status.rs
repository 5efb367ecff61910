//! # Transaction Status
//!
//! The observer's verdict on one submitted transaction.

use serde::{Deserialize, Serialize};

/// Outcome of observing a transaction.
///
/// `Accepted` and `Rejected` are terminal and immutable once produced; a
/// spent observation budget is not a status but an error
/// ([`crate::ObserverError`]), because the transaction's real outcome
/// remains unknown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Not yet confirmed by the network.
    Pending,

    /// Confirmed as a real execution or deployment.
    Accepted {
        /// Reported transaction type (`execute` or `deploy`).
        tx_type: String,
        /// Confirmed transaction id.
        confirmed_id: String,
        /// Containing block height, when the lookup succeeded.
        block_height: Option<u64>,
    },

    /// Confirmed fee-only: the execution failed and the fee was consumed.
    Rejected {
        /// Confirmed (fee) transaction id.
        confirmed_id: String,
        /// The original unconfirmed id, when the lookup succeeded.
        unconfirmed_id: Option<String>,
        /// Containing block height, when the lookup succeeded.
        block_height: Option<u64>,
        /// Human-readable rejection description.
        error: String,
    },
}

impl TransactionStatus {
    /// Whether the network has settled this transaction.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }

    /// Whether the transaction executed successfully.
    pub fn is_accepted(&self) -> bool {
        matches!(self, TransactionStatus::Accepted { .. })
    }
}
