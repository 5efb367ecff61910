//! # Reconciler Configuration
//!
//! Where the freeze list lives on chain and how hard to try to read it
//! consistently.

use fl_01_merkle_registry::MAX_TREE_DEPTH;
use serde::{Deserialize, Serialize};

/// Reconciler configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// On-chain program holding the freeze registry.
    pub program_id: String,

    /// Mapping of dense slot index (`0u32`, `1u32`, ...) to frozen address.
    pub freeze_list_mapping: String,

    /// Mapping holding the program's own slot counter.
    pub last_index_mapping: String,

    /// Mapping holding the committed roots: key `0u8` is the current root,
    /// key `1u8` the previous one (kept valid for the staleness window after
    /// a rotation; exposing it is this side's whole job, enforcing it is the
    /// chain's).
    pub root_mapping: String,

    /// Depth used when rebuilding the tree locally.
    pub tree_depth: usize,

    /// Safety bound on the pagination walk.
    pub max_slots: u64,

    /// How many full fetch-rebuild-compare cycles to attempt before
    /// reporting a root mismatch.
    pub max_root_retries: u32,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            program_id: "gated_token.aleo".to_string(),
            freeze_list_mapping: "freeze_list".to_string(),
            last_index_mapping: "freeze_list_last_index".to_string(),
            root_mapping: "freeze_list_root".to_string(),
            tree_depth: MAX_TREE_DEPTH,
            max_slots: 1 << (MAX_TREE_DEPTH - 1),
            max_root_retries: 3,
        }
    }
}

impl ReconcilerConfig {
    /// Create a config for testing (small bounds).
    pub fn for_testing() -> Self {
        Self {
            tree_depth: 4,
            max_slots: 32,
            max_root_retries: 2,
            ..Self::default()
        }
    }

    /// Mapping key for a freeze-list slot.
    pub fn slot_key(&self, slot: u64) -> String {
        format!("{slot}u32")
    }

    /// Mapping key of the current root.
    pub fn current_root_key(&self) -> &'static str {
        "0u8"
    }

    /// Mapping key of the previous (staleness-window) root.
    pub fn previous_root_key(&self) -> &'static str {
        "1u8"
    }

    /// Mapping key of the program's slot counter.
    pub fn last_index_key(&self) -> &'static str {
        "0u8"
    }
}
