//! # Shared Crypto - Chain-Native Hash Primitives
//!
//! The arithmetic hash every Merkle node in the freeze registry is built
//! from.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `poseidon` | Poseidon-style permutation over the scalar field | Merkle node compression |
//!
//! ## Compatibility
//!
//! [`hash_pair`] is the single bit-for-bit compatibility seam with the
//! on-chain verifier: both sides must compute the identical compression
//! function or every witness is worthless. The permutation parameters are
//! derived deterministically from fixed domain tags, so the function is
//! stable across runs, platforms, and versions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod poseidon;

pub use poseidon::{hash_pair, Poseidon};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
