//! The 96-bit per-stream seed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of one stream's seed in bytes.
pub const SEED_SLICE_LEN: usize = 12;

const SLICE_MASK: u128 = (1 << (SEED_SLICE_LEN * 8)) - 1;

/// One stream's current seed: a 96-bit unsigned integer stored
/// little-endian.
///
/// Sampling a stream hashes its slice and then advances it by one, so a
/// slice doubles as the stream's position counter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SeedSlice([u8; SEED_SLICE_LEN]);

impl SeedSlice {
    /// The all-zero seed.
    pub const ZERO: Self = Self([0; SEED_SLICE_LEN]);

    /// Wraps raw little-endian seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_SLICE_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw little-endian seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_SLICE_LEN] {
        &self.0
    }

    /// Builds a slice from the low 96 bits of `value`.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        let wide = (value & SLICE_MASK).to_le_bytes();
        let mut bytes = [0u8; SEED_SLICE_LEN];
        bytes.copy_from_slice(&wide[..SEED_SLICE_LEN]);
        Self(bytes)
    }

    /// Returns the slice as an integer in `[0, 2^96)`.
    #[must_use]
    pub fn to_u128(self) -> u128 {
        let mut wide = [0u8; 16];
        wide[..SEED_SLICE_LEN].copy_from_slice(&self.0);
        u128::from_le_bytes(wide)
    }

    /// Advances the slice by one, wrapping at 2^96.
    pub fn increment(&mut self) {
        *self = self.advanced_by(1);
    }

    /// Returns the slice advanced by `steps`, wrapping at 2^96.
    #[must_use]
    pub fn advanced_by(self, steps: u128) -> Self {
        Self::from_u128(self.to_u128().wrapping_add(steps))
    }

    /// Adds `amount` into the most significant byte, wrapping within that
    /// byte. Used by store expansion to tag each slot.
    pub(crate) fn add_to_top_byte(&mut self, amount: u8) {
        let top = &mut self.0[SEED_SLICE_LEN - 1];
        *top = top.wrapping_add(amount);
    }
}

impl From<[u8; SEED_SLICE_LEN]> for SeedSlice {
    fn from(bytes: [u8; SEED_SLICE_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SeedSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeedSlice(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_increment_touches_lowest_byte_first() {
        let mut slice = SeedSlice::ZERO;
        slice.increment();
        assert_eq!(slice.as_bytes()[0], 1);
        assert!(slice.as_bytes()[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_increment_propagates_carry() {
        let mut slice = SeedSlice::from_bytes([0xff, 0xff, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        slice.increment();
        assert_eq!(
            slice,
            SeedSlice::from_bytes([0, 0, 0x02, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_increment_wraps_at_96_bits() {
        let mut slice = SeedSlice::from_bytes([0xff; SEED_SLICE_LEN]);
        slice.increment();
        assert_eq!(slice, SeedSlice::ZERO);
    }

    #[test]
    fn test_from_u128_drops_bits_above_96() {
        let slice = SeedSlice::from_u128(u128::MAX);
        assert_eq!(slice, SeedSlice::from_bytes([0xff; SEED_SLICE_LEN]));
        assert_eq!(slice.to_u128(), (1u128 << 96) - 1);
    }

    #[test]
    fn test_add_to_top_byte_wraps_within_byte() {
        let mut slice = SeedSlice::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xfe]);
        slice.add_to_top_byte(3);
        assert_eq!(slice.as_bytes()[SEED_SLICE_LEN - 1], 0x01);
        assert!(slice.as_bytes()[..SEED_SLICE_LEN - 1].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_debug_renders_hex() {
        let slice = SeedSlice::from_bytes([0xab, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x10]);
        assert_eq!(format!("{slice:?}"), "SeedSlice(ab0100000000000000000010)");
    }

    proptest! {
        #[test]
        fn test_repeated_increment_matches_wrapping_add(bytes in any::<[u8; 12]>(), steps in 0u32..64) {
            let start = SeedSlice::from_bytes(bytes);
            let mut stepped = start;
            for _ in 0..steps {
                stepped.increment();
            }
            prop_assert_eq!(stepped, start.advanced_by(u128::from(steps)));
        }

        #[test]
        fn test_u128_conversion_is_lossless(bytes in any::<[u8; 12]>()) {
            let slice = SeedSlice::from_bytes(bytes);
            prop_assert_eq!(SeedSlice::from_u128(slice.to_u128()), slice);
        }
    }
}
