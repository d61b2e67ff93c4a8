//! Compact difficulty targets and the proof-of-work ceiling check

use crate::hash::Hash256;
use primitive_types::U256;

/// Result of expanding a compact ("nBits") value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactTarget {
    /// Expanded 256-bit target
    pub target: U256,
    /// Sign bit was set on a non-zero mantissa
    pub negative: bool,
    /// Exponent pushes the mantissa past 256 bits
    pub overflow: bool,
}

impl CompactTarget {
    /// Expand compact bits: `mantissa * 256^(exponent - 3)`.
    pub fn from_compact(bits: u32) -> Self {
        let size = bits >> 24;
        let mut word = bits & 0x007f_ffff;

        let target = if size <= 3 {
            word >>= 8 * (3 - size);
            U256::from(word)
        } else if size > 34 {
            U256::zero()
        } else {
            U256::from(word) << (8 * (size - 3)) as usize
        };

        let negative = word != 0 && (bits & 0x0080_0000) != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

        Self {
            target,
            negative,
            overflow,
        }
    }

    /// Target usable for comparison, or `None` when negative, zero or overflowing.
    pub fn valid_target(&self) -> Option<U256> {
        if self.negative || self.overflow || self.target.is_zero() {
            None
        } else {
            Some(self.target)
        }
    }
}

/// Interpret a hash as a 256-bit integer (internal order is little-endian).
pub fn hash_to_u256(hash: &Hash256) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// Parse a display-order hex ceiling such as a network's `pow_limit`.
pub fn u256_from_hex(s: &str) -> crate::Result<U256> {
    Ok(hash_to_u256(&Hash256::from_hex(s)?))
}

/// Whether `hash` satisfies `bits` without exceeding the network ceiling.
pub fn check_proof_of_work(hash: &Hash256, bits: u32, pow_limit: &U256) -> bool {
    let target = match CompactTarget::from_compact(bits).valid_target() {
        Some(target) => target,
        None => return false,
    };
    if target > *pow_limit {
        return false;
    }
    hash_to_u256(hash) <= target
}
