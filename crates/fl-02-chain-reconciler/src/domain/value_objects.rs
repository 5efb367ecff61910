//! # Domain Value Objects
//!
//! Immutable snapshot types for the reconciled freeze list.

use serde::{Deserialize, Serialize};
use shared_types::{Address, FieldElement};

/// One consistent view of the on-chain freeze list.
///
/// `addresses` preserves on-chain slot order, which is *not* the sorted
/// order the tree commits to - rebuild via `gen_leaves` before hashing, and
/// verify the result against `current_root`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreezeListSnapshot {
    /// Frozen addresses in slot order, sentinel entries filtered out.
    pub addresses: Vec<Address>,

    /// Index of the first unpopulated slot (equivalently, the number of
    /// populated slots walked, sentinels included).
    pub last_index: u64,

    /// The program's own slot counter, when published. Diverging from
    /// `last_index` indicates a race with an on-chain update.
    pub declared_last_index: Option<u64>,

    /// Root the chain currently accepts.
    pub current_root: FieldElement,

    /// Root from before the latest rotation, still accepted inside the
    /// staleness window. Exposed, never enforced here.
    pub previous_root: Option<FieldElement>,
}

impl FreezeListSnapshot {
    /// Whether the freeze list has no real entries.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
