//! Bias-free bounded sampling from a seed slice.

use tracing::debug;

use crate::hash::{Digest, digest};
use crate::seed::SeedSlice;

const WORD_SPAN: u64 = 1 << 32;

/// Draws a uniform integer in `[0, bound)` from `slice`, advancing it.
///
/// Each iteration hashes the slice, advances it by one, and scans the eight
/// digest words for one below the largest multiple of `bound` that fits in
/// 32 bits. The accepted word is scaled down by integer division rather than
/// reduced modulo `bound`, so larger hash outputs give larger results
/// whatever the bound. If all eight words are rejected the slice is hashed
/// again; each extra iteration advances it once more.
///
/// # Panics
///
/// Panics if `bound` is not positive.
pub fn draw_from_slice(slice: &mut SeedSlice, bound: i32) -> i32 {
    assert!(bound > 0, "random bound must be positive, got {bound}");
    let bound = bound.unsigned_abs();

    let mut iterations = 0u32;
    loop {
        let words = digest(slice.as_bytes());
        slice.increment();
        iterations += 1;

        if let Some(value) = pick_unbiased(&words, bound) {
            return value;
        }
        debug!(bound, iterations, "all digest words rejected, rehashing");
    }
}

/// Returns the first word of `words` that maps without bias into
/// `[0, bound)`, scaled into that range.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn pick_unbiased(words: &Digest, bound: u32) -> Option<i32> {
    let bound = u64::from(bound);
    let ceiling = WORD_SPAN - WORD_SPAN % bound;
    let scale = ceiling / bound;
    words
        .iter()
        .map(|&word| u64::from(word))
        .find(|&word| word < ceiling)
        // word / scale < bound <= i32::MAX
        .map(|word| (word / scale) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_main_slice() -> SeedSlice {
        SeedSlice::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1])
    }

    // --- pick_unbiased tests ---

    #[test]
    fn test_pick_scales_rather_than_reduces() {
        let words = [0xffff_ffff, 0, 0, 0, 0, 0, 0, 0];
        // Power of two: nothing is rejected, top word maps to the top value.
        assert_eq!(pick_unbiased(&words, 16), Some(15));
        let words = [0x8000_0000, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(pick_unbiased(&words, 16), Some(8));
    }

    #[test]
    fn test_pick_skips_words_at_or_above_ceiling() {
        // bound 3: ceiling is 0xffff_ffff, scale 0x5555_5555.
        let words = [0xffff_ffff, 0xffff_ffff, 0xaaaa_aaaa, 0, 0, 0, 0, 0];
        assert_eq!(pick_unbiased(&words, 3), Some(2));
    }

    #[test]
    fn test_pick_rejects_when_every_word_is_biased() {
        let words = [0xffff_ffff; 8];
        assert_eq!(pick_unbiased(&words, 3), None);
    }

    #[test]
    fn test_pick_bound_one_is_always_zero() {
        assert_eq!(pick_unbiased(&[0xffff_ffff; 8], 1), Some(0));
    }

    // --- draw_from_slice tests ---

    #[test]
    fn test_draw_known_sequence() {
        let mut slice = zero_main_slice();
        let draws: Vec<i32> = (0..10).map(|_| draw_from_slice(&mut slice, 20)).collect();
        assert_eq!(draws, [4, 10, 2, 19, 2, 4, 8, 3, 19, 5]);
    }

    #[test]
    fn test_draw_advances_slice_once_per_digest() {
        let start = zero_main_slice();
        let mut slice = start;
        for _ in 0..25 {
            draw_from_slice(&mut slice, 6);
        }
        assert_eq!(slice, start.advanced_by(25));
    }

    #[test]
    fn test_rejected_digest_rehashes_and_advances_again() {
        // All eight words of this slice's digest land in the rejected tail
        // for a bound just above 2^30.
        let start = SeedSlice::from_u128(178_345);
        let mut slice = start;
        let value = draw_from_slice(&mut slice, 0x4000_0001);
        assert_eq!(value, 780_006_592);
        assert_eq!(slice, start.advanced_by(2));
    }

    #[test]
    fn test_draw_largest_bound_stays_in_range() {
        let mut slice = zero_main_slice();
        for _ in 0..1000 {
            let value = draw_from_slice(&mut slice, i32::MAX);
            assert!((0..i32::MAX).contains(&value));
        }
    }

    #[test]
    #[should_panic(expected = "random bound must be positive, got 0")]
    fn test_zero_bound_panics() {
        draw_from_slice(&mut zero_main_slice(), 0);
    }

    #[test]
    #[should_panic(expected = "random bound must be positive, got -4")]
    fn test_negative_bound_panics() {
        draw_from_slice(&mut zero_main_slice(), -4);
    }
}
