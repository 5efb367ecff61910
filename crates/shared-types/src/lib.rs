//! # Shared Types Crate
//!
//! Cross-subsystem value types for Frostline.
//!
//! ## Components
//!
//! - `field` - Elements of the chain's 253-bit prime field, with the modular
//!   arithmetic the Merkle hash needs and the `"<decimal>field"` wire format
//! - `address` - Checksum-encoded account identifiers and the bidirectional
//!   address ↔ field codec
//! - `errors` - Codec error taxonomy
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every crate in the workspace speaks in these
//!   types; no subsystem redefines its own address or field representation.
//! - **Exact round-trips**: `Address` ↔ `FieldElement` conversion is lossless
//!   in both directions for all valid inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod errors;
pub mod field;

pub use address::{Address, ADDRESS_HRP};
pub use errors::CodecError;
pub use field::{FieldElement, FIELD_MODULUS};

// Re-export so downstream crates spell the backing integer the same way.
pub use primitive_types::U256;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
