//! # Node Client Port
//!
//! The narrow read surface this workspace consumes from a node, expressed as
//! a trait so services can run against the real HTTP adapter or the scripted
//! mock interchangeably.
//!
//! Every method returns `Ok(None)` for 404/absent — callers decide whether
//! that means "end of list" (mapping walks) or "not yet" (transaction
//! polls).

use async_trait::async_trait;

use crate::error::RpcError;
use crate::types::{ConfirmedTransaction, UnconfirmedTransaction};

/// Read-only node API - outbound port.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Read one mapping value of an on-chain program.
    ///
    /// The returned string is normalized: quote layer stripped, absent
    /// (`404`, empty, `null`) as `None`.
    async fn mapping_value(
        &self,
        program_id: &str,
        mapping: &str,
        key: &str,
    ) -> Result<Option<String>, RpcError>;

    /// Fetch a confirmed transaction; `None` while unconfirmed.
    async fn confirmed_transaction(
        &self,
        tx_id: &str,
    ) -> Result<Option<ConfirmedTransaction>, RpcError>;

    /// Fetch the original unconfirmed transaction (rejected path only).
    async fn unconfirmed_transaction(
        &self,
        tx_id: &str,
    ) -> Result<Option<UnconfirmedTransaction>, RpcError>;

    /// Find the hash of the block containing a transaction.
    async fn block_hash_of_transaction(&self, tx_id: &str) -> Result<Option<String>, RpcError>;

    /// Read a block's height from its hash.
    async fn block_height(&self, block_hash: &str) -> Result<Option<u64>, RpcError>;
}

/// Request path for a program mapping read.
pub fn mapping_path(program_id: &str, mapping: &str, key: &str) -> String {
    format!("program/{program_id}/mapping/{mapping}/{key}")
}

/// Request path for a confirmed transaction.
pub fn confirmed_path(tx_id: &str) -> String {
    format!("transaction/confirmed/{tx_id}")
}

/// Request path for an unconfirmed transaction.
pub fn unconfirmed_path(tx_id: &str) -> String {
    format!("transaction/unconfirmed/{tx_id}")
}

/// Request path for the block-hash lookup of a transaction.
pub fn find_block_hash_path(tx_id: &str) -> String {
    format!("find/blockHash/{tx_id}")
}

/// Request path for a block by hash.
pub fn block_path(block_hash: &str) -> String {
    format!("block/{block_hash}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_shapes() {
        assert_eq!(
            mapping_path("gated_token.aleo", "freeze_list", "0u32"),
            "program/gated_token.aleo/mapping/freeze_list/0u32"
        );
        assert_eq!(confirmed_path("at1x"), "transaction/confirmed/at1x");
        assert_eq!(unconfirmed_path("at1x"), "transaction/unconfirmed/at1x");
        assert_eq!(find_block_hash_path("at1x"), "find/blockHash/at1x");
        assert_eq!(block_path("ab1h"), "block/ab1h");
    }
}
