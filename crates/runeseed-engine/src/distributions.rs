//! Named distributions built from bounded draws.
//!
//! Every function here is a pure composition of `below` calls on a
//! [`DeterministicRng`]; none keeps state of its own. The draw order of each
//! function is part of replay compatibility.

use runeseed_core::rng::DeterministicRng;

/// Upper limit of [`geometric_count`].
pub const GEOMETRIC_CAP: i32 = 10;

/// Uniform integer in `[0, x)`.
///
/// # Panics
///
/// Panics if `x` is not positive.
pub fn uniform0<R: DeterministicRng + ?Sized>(rng: &mut R, x: i32) -> i32 {
    rng.below(x)
}

/// Uniform integer in `[1, x]`.
///
/// # Panics
///
/// Panics if `x` is not positive.
pub fn uniform1<R: DeterministicRng + ?Sized>(rng: &mut R, x: i32) -> i32 {
    uniform0(rng, x) + 1
}

/// Sum of `n` rolls of an `x`-sided die, in `[n, n * x]`.
///
/// # Panics
///
/// Panics if `n` is negative, `x` is not positive, or `n * x` overflows.
pub fn dice_sum<R: DeterministicRng + ?Sized>(rng: &mut R, n: i32, x: i32) -> i32 {
    assert!(n >= 0, "dice count must not be negative, got {n}");
    assert!(
        n.checked_mul(x).is_some(),
        "{n}d{x} overflows the result range"
    );
    (0..n).fold(n, |sum, _| sum + uniform0(rng, x))
}

/// Count of consecutive one-in-`x` successes plus one, capped at
/// [`GEOMETRIC_CAP`]. Result in `[1, GEOMETRIC_CAP]`.
///
/// # Panics
///
/// Panics if `x` is not positive.
pub fn geometric_count<R: DeterministicRng + ?Sized>(rng: &mut R, x: i32) -> i32 {
    let mut count = 1;
    while count < GEOMETRIC_CAP && uniform0(rng, x) == 0 {
        count += 1;
    }
    count
}

/// Scales `i` by a random factor skewed toward both larger and smaller
/// values.
///
/// The factor is `(1000 + uniform0(1000)) * geometric_count(4) / 1000`;
/// a coin flip decides whether `i` is multiplied or divided by it.
///
/// # Panics
///
/// Panics if the scaled value does not fit in an `i32`.
pub fn skewed_scale<R: DeterministicRng + ?Sized>(rng: &mut R, i: i32) -> i32 {
    let mut factor = 1000 + i64::from(uniform0(rng, 1000));
    factor *= i64::from(geometric_count(rng, 4));

    let x = i64::from(i);
    let scaled = if uniform0(rng, 2) != 0 {
        x * factor / 1000
    } else {
        x * 1000 / factor
    };
    i32::try_from(scaled)
        .unwrap_or_else(|_| panic!("skewed_scale({i}) overflowed the result range: {scaled}"))
}

/// Uniform integer in `[0, x)` nudged by the player's luck.
///
/// Unless a one-in-`(50 - luck)` check comes up zero, good luck lowers the
/// result and bad luck raises it: by a third of `luck` for ranges of at most
/// 15 when luck is above -5, by the full `luck` otherwise. The result is
/// clamped back into `[0, x)`.
///
/// # Panics
///
/// Panics if `x` is not positive, `luck >= 50`, or `50 - luck` does not fit
/// in an `i32`.
pub fn luck_adjusted<R: DeterministicRng + ?Sized>(rng: &mut R, x: i32, luck: i32) -> i32 {
    let check_bound = 50i32
        .checked_sub(luck)
        .filter(|&bound| bound > 0)
        .unwrap_or_else(|| panic!("luck {luck} is out of range"));

    let mut i = uniform0(rng, x);
    if luck != 0 && uniform0(rng, check_bound) != 0 {
        let adjustment = if x <= 15 && luck >= -5 { luck / 3 } else { luck };
        i = i.saturating_sub(adjustment).clamp(0, x - 1);
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeseed_test_support::{MockRng, SequenceRng};

    // --- uniform tests ---

    #[test]
    fn test_uniform1_is_one_based() {
        let mut rng = SequenceRng::new(vec![0, 5]);
        assert_eq!(uniform1(&mut rng, 6), 1);
        assert_eq!(uniform1(&mut rng, 6), 6);
        assert_eq!(rng.bounds(), [6, 6]);
    }

    // --- dice_sum tests ---

    #[test]
    fn test_dice_sum_adds_one_per_die() {
        let mut rng = SequenceRng::new(vec![0, 5, 2]);
        assert_eq!(dice_sum(&mut rng, 3, 6), 3 + 7);
        assert_eq!(rng.bounds(), [6, 6, 6]);
    }

    #[test]
    fn test_dice_sum_of_zero_dice_draws_nothing() {
        let mut rng = SequenceRng::new(vec![]);
        assert_eq!(dice_sum(&mut rng, 0, 6), 0);
    }

    #[test]
    #[should_panic(expected = "overflows the result range")]
    fn test_dice_sum_overflow_panics() {
        dice_sum(&mut MockRng, 70_000, 70_000);
    }

    #[test]
    #[should_panic(expected = "dice count must not be negative")]
    fn test_dice_sum_negative_count_panics() {
        dice_sum(&mut MockRng, -1, 6);
    }

    // --- geometric_count tests ---

    #[test]
    fn test_geometric_count_stops_on_first_nonzero() {
        let mut rng = SequenceRng::new(vec![0, 0, 3]);
        assert_eq!(geometric_count(&mut rng, 4), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_geometric_count_is_capped() {
        let mut rng = SequenceRng::new(vec![0; 9]);
        assert_eq!(geometric_count(&mut rng, 4), GEOMETRIC_CAP);
        assert_eq!(rng.remaining(), 0);
    }

    // --- skewed_scale tests ---

    #[test]
    fn test_skewed_scale_identity_factor() {
        // factor 1000 * 1, multiply branch
        let mut rng = SequenceRng::new(vec![0, 1, 1]);
        assert_eq!(skewed_scale(&mut rng, 350), 350);
        assert_eq!(rng.bounds(), [1000, 4, 2]);
    }

    #[test]
    fn test_skewed_scale_multiplies_on_heads() {
        // factor 1500 * 2 = 3000
        let mut rng = SequenceRng::new(vec![500, 0, 1, 1]);
        assert_eq!(skewed_scale(&mut rng, 350), 1050);
    }

    #[test]
    fn test_skewed_scale_divides_on_tails() {
        let mut rng = SequenceRng::new(vec![500, 0, 1, 0]);
        assert_eq!(skewed_scale(&mut rng, 350), 116);
    }

    #[test]
    fn test_skewed_scale_negative_input_truncates_toward_zero() {
        let mut rng = SequenceRng::new(vec![500, 0, 1, 0]);
        assert_eq!(skewed_scale(&mut rng, -350), -116);
    }

    #[test]
    #[should_panic(expected = "overflowed the result range")]
    fn test_skewed_scale_overflow_panics() {
        let mut rng = SequenceRng::new(vec![999, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        skewed_scale(&mut rng, i32::MAX);
    }

    // --- luck_adjusted tests ---

    #[test]
    fn test_luck_zero_draws_once() {
        let mut rng = SequenceRng::new(vec![7]);
        assert_eq!(luck_adjusted(&mut rng, 10, 0), 7);
        assert_eq!(rng.bounds(), [10]);
    }

    #[test]
    fn test_luck_check_zero_skips_adjustment() {
        let mut rng = SequenceRng::new(vec![5, 0]);
        assert_eq!(luck_adjusted(&mut rng, 10, 3), 5);
        assert_eq!(rng.bounds(), [10, 47]);
    }

    #[test]
    fn test_good_luck_on_small_range_uses_a_third() {
        let mut rng = SequenceRng::new(vec![5, 1]);
        assert_eq!(luck_adjusted(&mut rng, 10, 3), 4);
    }

    #[test]
    fn test_good_luck_on_large_range_uses_full_luck() {
        let mut rng = SequenceRng::new(vec![5, 1]);
        assert_eq!(luck_adjusted(&mut rng, 20, 3), 2);
    }

    #[test]
    fn test_mild_bad_luck_on_small_range_uses_a_third() {
        let mut rng = SequenceRng::new(vec![5, 1]);
        assert_eq!(luck_adjusted(&mut rng, 10, -5), 6);
        assert_eq!(rng.bounds(), [10, 55]);
    }

    #[test]
    fn test_heavy_bad_luck_uses_full_luck_and_clamps_high() {
        let mut rng = SequenceRng::new(vec![8, 1]);
        assert_eq!(luck_adjusted(&mut rng, 10, -10), 9);
        assert_eq!(rng.bounds(), [10, 60]);
    }

    #[test]
    #[should_panic(expected = "luck 50 is out of range")]
    fn test_luck_of_fifty_panics() {
        luck_adjusted(&mut MockRng, 10, 50);
    }

    #[test]
    #[should_panic(expected = "is out of range")]
    fn test_luck_far_below_zero_panics_with_diagnostic() {
        luck_adjusted(&mut MockRng, 10, i32::MIN);
    }

    #[test]
    fn test_very_bad_luck_within_range_is_clamped() {
        let mut rng = SequenceRng::new(vec![3, 1]);
        assert_eq!(luck_adjusted(&mut rng, 10, -1000), 9);
        assert_eq!(rng.bounds(), [10, 1050]);
    }

    #[test]
    fn test_good_luck_clamps_low() {
        let mut rng = SequenceRng::new(vec![2, 1]);
        assert_eq!(luck_adjusted(&mut rng, 10, 13), 0);
    }
}
