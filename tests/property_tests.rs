//! Property-based tests for interval prime counting.
//!
//! These tests use the `proptest` framework to verify counting invariants
//! across thousands of randomly generated intervals. Unlike the
//! example-based suite, they express universal truths that must
//! hold for all valid inputs: the count agrees with trial division no
//! matter where the interval sits, and no matter how it is split or
//! segmented.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//!
//! # Increase case count for thorough testing (default is 256):
//! PROPTEST_CASES=2000 cargo test --test property_tests
//! ```
//!
//! Ranges are kept moderate (starts up to 10^6, lengths up to a few
//! thousand) so the trial-division reference stays fast; the example-based
//! suite covers the large-offset spot checks.

use proptest::prelude::*;

use primespan::{count_primes_in_interval, trialdiv, IntervalCounter};

proptest! {
    /// The count over an interval equals the trial-division count over the
    /// same interval, for arbitrary moderate windows.
    ///
    /// **Property**: count(start, length) == |{p prime : start <= p < start + length}|
    #[test]
    fn prop_count_matches_trial_division(
        start in 0i64..500_000,
        length in 0i64..1_200,
    ) {
        let counted = count_primes_in_interval(start, length).unwrap();
        let expected = trialdiv::count_primes(start, length);
        prop_assert_eq!(counted, expected,
            "[{}, {}+{}) counted {} but trial division says {}",
            start, start, length, counted, expected);
    }

    /// Splitting an interval anywhere and summing the halves changes
    /// nothing.
    ///
    /// **Property**: count(a, l1 + l2) == count(a, l1) + count(a + l1, l2)
    ///
    /// This is the algebraic core of segmentation: the driver relies on it
    /// every time it cuts the interval at a chunk boundary.
    #[test]
    fn prop_count_is_additive_over_splits(
        start in -1_000i64..1_000_000,
        l1 in 0i64..2_000,
        l2 in 0i64..2_000,
    ) {
        let whole = count_primes_in_interval(start, l1 + l2).unwrap();
        let left = count_primes_in_interval(start, l1).unwrap();
        let right = count_primes_in_interval(start + l1, l2).unwrap();
        prop_assert_eq!(whole, left + right,
            "split at {}: {} != {} + {}", start + l1, whole, left, right);
    }

    /// The configured maximum segment length never changes a total.
    ///
    /// **Property**: for any chunk in [1, 64],
    /// IntervalCounter(chunk).count == IntervalCounter::default().count
    #[test]
    fn prop_segment_length_invariant(
        start in 0i64..100_000,
        length in 1i64..1_500,
        chunk in 1i64..64,
    ) {
        let chunked = IntervalCounter::new(chunk).unwrap().count(start, length).unwrap();
        let whole = count_primes_in_interval(start, length).unwrap();
        prop_assert_eq!(chunked, whole,
            "chunk {} diverged on [{}, {}+{})", chunk, start, start, length);
    }

    /// Clamping a start below 2 is exactly equivalent to asking for the
    /// surviving sub-interval.
    ///
    /// **Property**: for start < 2 with end > 2,
    /// count(start, length) == count(2, end - 2)
    #[test]
    fn prop_clamping_equivalence(
        start in -2_000i64..2,
        length in 1i64..4_000,
    ) {
        prop_assume!(start + length > 2);
        let clamped = count_primes_in_interval(start, length).unwrap();
        let direct = count_primes_in_interval(2, start + length - 2).unwrap();
        prop_assert_eq!(clamped, direct);
    }

    /// Prefix counts are nondecreasing and grow by at most one per step.
    ///
    /// **Property**: count(0, n+1) - count(0, n) is 0 or 1, and is 1
    /// exactly when n is prime.
    #[test]
    fn prop_prefix_growth_tracks_primality(n in 0i64..20_000) {
        let below = count_primes_in_interval(0, n).unwrap();
        let at = count_primes_in_interval(0, n + 1).unwrap();
        let delta = at - below;
        prop_assert!(delta == 0 || delta == 1);
        prop_assert_eq!(delta == 1, trialdiv::is_prime(n),
            "delta {} at n = {}", delta, n);
    }
}
