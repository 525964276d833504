//! Index encoding between integers and qubit bit patterns.
//!
//! Bit `i` of a [`BitPattern`] is the value of qubit `i`, and qubit 0 is the
//! least-significant bit of the decoded integer. The operator builder and the
//! result decoder both go through this module so the convention cannot drift
//! between marking and measurement.

use serde::{Deserialize, Serialize};
use std::fmt;

use qsteiner_ir::QubitId;

use crate::error::{GroverError, GroverResult};

/// Widest pattern that still decodes into a `u64`.
pub const MAX_WIDTH: u32 = 64;

/// Fixed-width bit pattern, one entry per qubit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitPattern {
    bits: Vec<bool>,
}

impl BitPattern {
    /// Encode `value` into `width` bits.
    pub fn encode(value: u64, width: u32) -> GroverResult<Self> {
        if width > MAX_WIDTH {
            return Err(GroverError::WidthTooLarge {
                width,
                max: MAX_WIDTH,
            });
        }
        if width < MAX_WIDTH && value >> width != 0 {
            return Err(GroverError::EncodingOverflow { value, width });
        }
        let bits = (0..width).map(|i| (value >> i) & 1 == 1).collect();
        Ok(Self { bits })
    }

    /// Pattern of a measured basis index over `width` qubits.
    pub fn from_outcome(outcome: usize, width: u32) -> GroverResult<Self> {
        Self::encode(outcome as u64, width)
    }

    /// Reconstruct the integer, qubit 0 least significant.
    pub fn decode(&self) -> u64 {
        self.bits
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &bit)| acc | (u64::from(bit) << i))
    }

    /// Number of bits.
    pub fn width(&self) -> u32 {
        self.bits.len() as u32
    }

    /// All bits, index = qubit.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Value of qubit `qubit`, if within the pattern.
    pub fn bit(&self, qubit: QubitId) -> Option<bool> {
        self.bits.get(qubit.index()).copied()
    }

    /// Qubits whose bit is 0.
    pub fn zero_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| !bit)
            .map(|(i, _)| QubitId(i as u32))
    }
}

impl fmt::Display for BitPattern {
    /// Qubit 0 rightmost, matching measurement bitstrings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter().rev() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encode `value` into a `width`-bit pattern.
pub fn encode(value: u64, width: u32) -> GroverResult<BitPattern> {
    BitPattern::encode(value, width)
}

/// Decode a bit pattern back into its integer value.
pub fn decode(bits: &BitPattern) -> u64 {
    bits.decode()
}

/// Data-qubit width for `n_candidates`: `max(1, ⌈log₂ N⌉)`.
pub fn qubit_width(n_candidates: u64) -> GroverResult<u32> {
    match n_candidates {
        0 => Err(GroverError::EmptyCandidateSpace),
        1 => Ok(1),
        n => Ok(u64::BITS - (n - 1).leading_zeros()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_lsb_first() {
        let bits = encode(0b110, 3).unwrap();
        assert_eq!(bits.bits(), &[false, true, true]);
        assert_eq!(bits.bit(QubitId(0)), Some(false));
        assert_eq!(bits.bit(QubitId(2)), Some(true));
        assert_eq!(bits.bit(QubitId(3)), None);
        assert_eq!(bits.to_string(), "110");
    }

    #[test]
    fn test_zero_qubits() {
        let bits = encode(2, 3).unwrap();
        let zeros: Vec<_> = bits.zero_qubits().collect();
        assert_eq!(zeros, vec![QubitId(0), QubitId(2)]);
    }

    #[test]
    fn test_encode_overflow() {
        assert!(matches!(
            encode(8, 3),
            Err(GroverError::EncodingOverflow { value: 8, width: 3 })
        ));
        assert!(matches!(
            encode(1, 0),
            Err(GroverError::EncodingOverflow { value: 1, width: 0 })
        ));
        assert_eq!(decode(&encode(0, 0).unwrap()), 0);
    }

    #[test]
    fn test_full_width() {
        let bits = encode(u64::MAX, 64).unwrap();
        assert_eq!(decode(&bits), u64::MAX);
        assert!(matches!(
            encode(0, 65),
            Err(GroverError::WidthTooLarge { width: 65, max: 64 })
        ));
    }

    #[test]
    fn test_qubit_width() {
        assert!(matches!(
            qubit_width(0),
            Err(GroverError::EmptyCandidateSpace)
        ));
        assert_eq!(qubit_width(1).unwrap(), 1);
        assert_eq!(qubit_width(2).unwrap(), 1);
        assert_eq!(qubit_width(3).unwrap(), 2);
        assert_eq!(qubit_width(4).unwrap(), 2);
        assert_eq!(qubit_width(5).unwrap(), 3);
        assert_eq!(qubit_width(8).unwrap(), 3);
        assert_eq!(qubit_width(9).unwrap(), 4);
        assert_eq!(qubit_width(1 << 20).unwrap(), 20);
        assert_eq!(qubit_width(u64::MAX).unwrap(), 64);
    }

    proptest! {
        #[test]
        fn roundtrip_all_widths(width in 1u32..=64, raw in any::<u64>()) {
            let value = if width == 64 { raw } else { raw & ((1u64 << width) - 1) };
            let bits = encode(value, width).unwrap();
            prop_assert_eq!(bits.width(), width);
            prop_assert_eq!(decode(&bits), value);
        }

        #[test]
        fn outcome_pattern_matches_basis_bits(width in 1u32..=16, raw in any::<u16>()) {
            let outcome = (raw as usize) & ((1usize << width) - 1);
            let bits = BitPattern::from_outcome(outcome, width).unwrap();
            for q in 0..width {
                prop_assert_eq!(bits.bit(QubitId(q)), Some(outcome & (1 << q) != 0));
            }
        }
    }
}
