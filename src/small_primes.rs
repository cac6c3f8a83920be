//! # Small Primes — One-Time Striking-Prime Generation
//!
//! Builds the read-only sieve of "small" primes that the segment counter
//! strikes with. A composite `c` always has a prime factor no larger than
//! `isqrt(c)`, so a sieve covering `[0, isqrt(end - 1) + 1)` holds every
//! factor needed to eliminate every composite below `end`. Built once per
//! interval query with the classical (unsegmented) Sieve of Eratosthenes,
//! then shared immutably by all segments.

use anyhow::{ensure, Context, Result};
use tracing::debug;

use crate::sieve::RangeSieve;

/// Upper bound sufficient for any representable interval.
///
/// The largest value any query can examine is 2^63 - 1, and
/// `isqrt(2^63 - 1) = 3_037_000_499`, so every composite below 2^63 has a
/// prime factor at most 3_037_000_499. Sieving `[0, 3_037_000_500)` therefore
/// covers every striking prime any segment can need.
pub const MAX_SMALL_PRIME_BOUND: i64 = 3_037_000_500;

/// Smallest sieve bound that covers every prime factor of every composite
/// below `end` (the exclusive upper endpoint of the target interval,
/// `3 <= end <= 2^63`).
///
/// Sizing to the query at hand rather than always to [`MAX_SMALL_PRIME_BOUND`]
/// keeps small queries from paying for a ~380 MiB worst-case sieve; for `end`
/// near 2^63 the two coincide.
pub fn bound_for(end: u64) -> i64 {
    debug_assert!(end >= 3, "normalized intervals end above 2");
    let need = (end - 1).isqrt() + 1;
    need.min(MAX_SMALL_PRIME_BOUND as u64) as i64
}

/// Run a classical prime sieve over `[0, bound)` and return the finished,
/// thereafter read-only sieve.
///
/// 0 and 1 are marked composite up front. Each `i` still unmarked when the
/// scan reaches it is prime, and its multiples from `i²` upward are struck
/// (everything below `i²` was already struck via a smaller prime factor).
///
/// Allocation failure is fatal to the query: the bound cannot shrink without
/// losing factor coverage, so the error is reported, never retried.
pub fn find_small_primes(bound: i64) -> Result<RangeSieve> {
    ensure!(bound >= 2, "small-primes bound must be at least 2, got {}", bound);
    let mut sieve = RangeSieve::new(0, bound).context("small-primes sieve")?;

    sieve.mark_composite(0);
    sieve.mark_composite(1);

    let bound = bound as u64;
    let mut i: u64 = 2;
    while i * i < bound {
        if sieve.is_prime(i as usize) {
            let mut j = i * i;
            while j < bound {
                sieve.mark_composite(j as usize);
                j += i;
            }
        }
        i += 1;
    }

    #[cfg(feature = "cross-validate")]
    verify_against_trial_division(&sieve);

    debug!(
        bound,
        primes = sieve.count_primes(),
        "small-primes sieve ready"
    );
    Ok(sieve)
}

/// Assert every entry against the independent trial-division oracle.
/// Validation builds only; a disagreement is an algorithm defect, not an
/// input problem.
#[cfg(feature = "cross-validate")]
fn verify_against_trial_division(sieve: &RangeSieve) {
    use crate::trialdiv;
    for i in 0..sieve.len() {
        assert_eq!(
            sieve.is_prime(i),
            trialdiv::is_prime(i as i64),
            "small-primes sieve disagrees with trial division at {}",
            i
        );
    }
}
