//! # Field Elements
//!
//! Elements of the chain's scalar field, a 253-bit prime field.
//!
//! ## Properties
//!
//! - Backed by `U256` with 512-bit widening multiplication, so no operation
//!   can overflow before reduction
//! - Total ordering matches integer ordering, which is what the sorted
//!   Merkle leaf set relies on
//! - Wire format is the decimal value with a `field` suffix (`"42field"`),
//!   exactly as mapping values come back from the node

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use primitive_types::{U256, U512};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CodecError;

/// The field modulus: a 253-bit prime.
///
/// Limbs are little-endian 64-bit words of
/// `8444461749428370424248824938781546531375899335154063827935233455917409239041`.
pub const FIELD_MODULUS: U256 = U256([
    0x0a11_8000_0000_0001,
    0x59aa_76fe_d000_0001,
    0x60b4_4d1e_5c37_b001,
    0x12ab_655e_9a2c_a556,
]);

/// Suffix carried by field-element literals on the wire.
const FIELD_SUFFIX: &str = "field";

/// Element in the chain's scalar field.
///
/// Always holds a value strictly below [`FIELD_MODULUS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(U256);

impl FieldElement {
    /// The additive identity, also the Merkle padding sentinel.
    pub const ZERO: FieldElement = FieldElement(U256([0, 0, 0, 0]));

    /// The multiplicative identity.
    pub const ONE: FieldElement = FieldElement(U256([1, 0, 0, 0]));

    /// Create a field element, rejecting values at or beyond the modulus.
    pub fn new(value: U256) -> Result<Self, CodecError> {
        if value >= FIELD_MODULUS {
            return Err(CodecError::InvalidField {
                value: value.to_string(),
                reason: "value exceeds field modulus".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Create a field element from a small integer (always in range).
    pub fn from_u64(value: u64) -> Self {
        Self(U256::from(value))
    }

    /// Create a field element by reducing an arbitrary 256-bit value mod p.
    ///
    /// Used where the input is a digest rather than a canonical encoding;
    /// canonical inputs go through [`FieldElement::new`] so out-of-range
    /// values are rejected instead of silently wrapped.
    pub fn from_u256_reduced(value: U256) -> Self {
        Self(value % FIELD_MODULUS)
    }

    /// Interpret 32 little-endian bytes, rejecting out-of-range values.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Result<Self, CodecError> {
        Self::new(U256::from_little_endian(bytes))
    }

    /// The canonical 32-byte little-endian encoding.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut buf = [0u8; 32];
        self.0.to_little_endian(&mut buf);
        buf
    }

    /// Get the raw value.
    pub fn value(&self) -> U256 {
        self.0
    }

    /// Check if zero (the padding sentinel).
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exponentiation by squaring.
    pub fn pow(&self, exp: U256) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;
        for i in 0..exp.bits() {
            if exp.bit(i) {
                result = result * base;
            }
            base = base * base;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(p-2) mod p.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(self.pow(FIELD_MODULUS - U256::from(2u64)))
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Both operands are < 2^253, so the plain sum cannot overflow U256.
        let sum = self.0 + rhs.0;
        if sum >= FIELD_MODULUS {
            Self(sum - FIELD_MODULUS)
        } else {
            Self(sum)
        }
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(FIELD_MODULUS - rhs.0 + self.0)
        }
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let wide: U512 = self.0.full_mul(rhs.0);
        let rem = wide % U512::from(FIELD_MODULUS);
        // rem < p < 2^256, so the high limbs are zero.
        Self(U256([rem.0[0], rem.0[1], rem.0[2], rem.0[3]]))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            Self(FIELD_MODULUS - self.0)
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, FIELD_SUFFIX)
    }
}

impl FromStr for FieldElement {
    type Err = CodecError;

    /// Parse a `"<decimal>field"` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CodecError::InvalidField {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let digits = s
            .strip_suffix(FIELD_SUFFIX)
            .ok_or_else(|| invalid("missing field suffix"))?;
        if digits.is_empty() {
            return Err(invalid("empty numeric part"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("non-decimal digit in numeric part"));
        }
        let value = U256::from_dec_str(digits).map_err(|_| invalid("numeric part out of range"))?;
        Self::new(value)
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}
