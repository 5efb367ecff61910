//! # Non-Inclusion Witnesses
//!
//! Authentication paths padded to the fixed maximum depth, and the
//! adjacent-leaf bracketing that proves a value absent from the sorted set.

use serde::{Deserialize, Serialize};
use shared_crypto::hash_pair;
use shared_types::{Address, FieldElement};

use crate::errors::RegistryError;
use crate::tree::MerkleTree;
use crate::MAX_TREE_DEPTH;

/// Authentication path from one leaf to the root.
///
/// `siblings` holds the real sibling hash for each populated level and the
/// zero sentinel for every level above the tree's actual height; the
/// verifier checks the padded levels separately. `leaf_index` is the
/// original leaf position, untouched by the walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingPath {
    /// Sibling hashes, leaf level first, zero-padded to the maximum depth.
    pub siblings: [FieldElement; MAX_TREE_DEPTH],
    /// Index of the authenticated leaf.
    pub leaf_index: u32,
}

/// A pair of authentication paths bracketing an absent value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonInclusionWitness {
    /// Path for the leaf immediately below the candidate.
    pub left: SiblingPath,
    /// Path for the leaf immediately above the candidate.
    pub right: SiblingPath,
}

/// Locate the two adjacent leaves bracketing an address's field value.
///
/// Scans the sorted leaf level for the smallest index `r` with
/// `value <= leaves[r]`. Both boundary cases collapse to a single leaf:
/// everything smaller than the candidate gives `(n-1, n-1)`, and `r == 0`
/// gives `(0, 0)` - the on-chain circuit expects exactly this convention,
/// including at the low boundary where the general `(r-1, r)` rule does not
/// apply.
pub fn locate_bracket(tree: &MerkleTree, address: &Address) -> (usize, usize) {
    let value = address.to_field();
    let leaves = tree.leaves();
    match leaves.iter().position(|leaf| value <= *leaf) {
        None => (leaves.len() - 1, leaves.len() - 1),
        Some(0) => (0, 0),
        Some(r) => (r - 1, r),
    }
}

/// Authentication path for the leaf at `leaf_index`.
pub fn sibling_path(tree: &MerkleTree, leaf_index: usize) -> Result<SiblingPath, RegistryError> {
    if leaf_index >= tree.num_leaves() {
        return Err(RegistryError::LeafIndexOutOfRange {
            index: leaf_index,
            leaves: tree.num_leaves(),
        });
    }
    if tree.height() > MAX_TREE_DEPTH {
        return Err(RegistryError::TreeTooDeep {
            height: tree.height(),
            max: MAX_TREE_DEPTH,
        });
    }

    let mut siblings = [FieldElement::ZERO; MAX_TREE_DEPTH];
    let mut local = leaf_index;
    let mut level_start = 0;
    let mut width = tree.num_leaves();
    let mut level = 0;
    while width > 1 {
        siblings[level] = tree.nodes()[level_start + (local ^ 1)];
        level_start += width;
        local /= 2;
        width /= 2;
        level += 1;
    }

    Ok(SiblingPath {
        siblings,
        leaf_index: leaf_index as u32,
    })
}

/// Build the full non-inclusion witness for an address.
///
/// When the candidate falls outside the tree's value range both paths
/// authenticate the same boundary leaf; that is a valid witness, not an
/// error.
pub fn non_inclusion_witness(
    tree: &MerkleTree,
    address: &Address,
) -> Result<NonInclusionWitness, RegistryError> {
    let (left, right) = locate_bracket(tree, address);
    Ok(NonInclusionWitness {
        left: sibling_path(tree, left)?,
        right: sibling_path(tree, right)?,
    })
}

/// Re-hash a leaf through its recorded siblings and compare with `root`.
///
/// Only the `height` populated levels participate; the zero-padded tail is
/// the verifier circuit's business.
pub fn verify_path(
    path: &SiblingPath,
    leaf: &FieldElement,
    root: &FieldElement,
    height: usize,
) -> bool {
    let mut current = *leaf;
    let mut index = path.leaf_index as usize;
    for sibling in path.siblings.iter().take(height.min(MAX_TREE_DEPTH)) {
        current = if index % 2 == 0 {
            hash_pair(&current, sibling)
        } else {
            hash_pair(sibling, &current)
        };
        index /= 2;
    }
    current == *root
}
