//! # Addresses
//!
//! Checksum-encoded account identifiers and the address ↔ field codec.
//!
//! An address is the Bech32m encoding (human-readable prefix `aleo`) of a
//! 32-byte payload; the payload bytes read little-endian are the account's
//! field value. Parsing validates checksum, prefix, payload length, and
//! field range up front, so a constructed [`Address`] always converts to a
//! [`FieldElement`] without failure.

use std::fmt;
use std::str::FromStr;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32m, Hrp};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CodecError;
use crate::field::FieldElement;

/// Human-readable prefix of every account address.
pub const ADDRESS_HRP: &str = "aleo";

/// Payload length of a well-formed address, in bytes.
const PAYLOAD_LEN: usize = 32;

/// The sentinel "zero" address: encodes the zero field element.
///
/// Used purely as Merkle-tree padding; never a real account.
const SENTINEL_ADDRESS: &str = "aleo1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq3ljyzc";

/// A validated account address.
///
/// Holds both the canonical (lowercase) string form and the decoded field
/// value, so conversion in either direction never re-parses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    text: String,
    field: FieldElement,
}

impl Address {
    /// The sentinel padding address (zero field value).
    pub fn sentinel() -> Self {
        Self {
            text: SENTINEL_ADDRESS.to_string(),
            field: FieldElement::ZERO,
        }
    }

    /// Encode a field element as an address.
    pub fn from_field(field: &FieldElement) -> Result<Self, CodecError> {
        let hrp = Hrp::parse(ADDRESS_HRP).map_err(|e| CodecError::InvalidField {
            value: field.to_string(),
            reason: format!("invalid address prefix: {e}"),
        })?;
        let text = bech32::encode::<Bech32m>(hrp, &field.to_le_bytes()).map_err(|e| {
            CodecError::InvalidField {
                value: field.to_string(),
                reason: format!("checksum encoding failed: {e}"),
            }
        })?;
        Ok(Self {
            text,
            field: *field,
        })
    }

    /// Decode a `"<decimal>field"` literal into an address.
    pub fn from_field_str(s: &str) -> Result<Self, CodecError> {
        let field: FieldElement = s.parse()?;
        Self::from_field(&field)
    }

    /// The account's field value.
    ///
    /// Total: range validation already happened when the address was parsed.
    pub fn to_field(&self) -> FieldElement {
        self.field
    }

    /// Whether this is the sentinel padding address.
    pub fn is_sentinel(&self) -> bool {
        self.field.is_zero()
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| CodecError::InvalidAddress {
            address: s.to_string(),
            reason,
        };

        let checked = CheckedHrpstring::new::<Bech32m>(s)
            .map_err(|e| invalid(format!("checksum validation failed: {e}")))?;
        if checked.hrp().to_lowercase() != ADDRESS_HRP {
            return Err(invalid(format!(
                "wrong prefix {:?}, expected {:?}",
                checked.hrp().to_lowercase(),
                ADDRESS_HRP
            )));
        }
        let payload: Vec<u8> = checked.byte_iter().collect();
        if payload.len() != PAYLOAD_LEN {
            return Err(invalid(format!(
                "payload is {} bytes, expected {PAYLOAD_LEN}",
                payload.len()
            )));
        }
        let mut bytes = [0u8; PAYLOAD_LEN];
        bytes.copy_from_slice(&payload);
        let field = FieldElement::from_le_bytes(&bytes)
            .map_err(|_| invalid("payload exceeds field modulus".to_string()))?;

        Ok(Self {
            text: s.to_lowercase(),
            field,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}
