//! # Leaf-Set Construction
//!
//! Turns the raw, slot-ordered freeze list into the canonical leaf set the
//! on-chain program committed to: sentinel filtered, converted to field
//! values, sorted ascending, and left-padded with the zero sentinel to a
//! power-of-two length.

use shared_types::{Address, FieldElement};

use crate::errors::RegistryError;
use crate::MAX_TREE_DEPTH;

/// Build the canonical leaf set for a list of addresses.
///
/// `depth` bounds the tree: at most `2^(depth - 1)` real addresses fit.
/// The result length is `max(2, next_power_of_two(n))` where `n` counts the
/// non-sentinel addresses; padding sentinels sort first, so the whole
/// sequence is ascending.
pub fn gen_leaves(addresses: &[Address], depth: usize) -> Result<Vec<FieldElement>, RegistryError> {
    if depth < 2 || depth > MAX_TREE_DEPTH {
        return Err(RegistryError::DepthOutOfRange {
            depth,
            max: MAX_TREE_DEPTH,
        });
    }

    let mut fields: Vec<FieldElement> = addresses
        .iter()
        .filter(|address| !address.is_sentinel())
        .map(Address::to_field)
        .collect();

    let capacity = 1usize << (depth - 1);
    if fields.len() > capacity {
        return Err(RegistryError::TreeFull {
            count: fields.len(),
            capacity,
        });
    }

    fields.sort_unstable();

    let target = fields.len().next_power_of_two().max(2);
    let mut leaves = vec![FieldElement::ZERO; target - fields.len()];
    leaves.extend(fields);
    Ok(leaves)
}
