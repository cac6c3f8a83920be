//! # Segment Counter — One Bounded Chunk of the Target Interval
//!
//! Counts the primes in `[start, start + length)` for a single
//! bounded-length segment. A fresh [`RangeSieve`] is created with the
//! segment's start as its base, every small prime is struck through it, and
//! the survivors are counted by popcount. The segment sieve lives only for
//! the duration of the call; segmentation is what keeps peak memory
//! independent of the full interval size.
//!
//! The delicate part is index arithmetic at arbitrary 64-bit offsets: the
//! first multiple of each prime `p` inside the segment is located by
//! remainder arithmetic alone, and a prime sitting exactly at (or after) the
//! segment start must not be struck by itself.

use anyhow::{Context, Result};
use tracing::trace;

use crate::sieve::RangeSieve;

/// Count primes in the segment `[start, start + length)`.
///
/// Requires `start >= 2` and `length > 0` (the interval driver normalizes
/// both before segmenting), and a `small_primes` sieve covering every prime
/// up to `isqrt(start + length - 1)`: with that coverage, every composite
/// in the segment is struck by at least one of its factors, so whatever
/// survives is prime.
pub fn count_primes_in_segment(
    start: i64,
    length: i64,
    small_primes: &RangeSieve,
) -> Result<i64> {
    debug_assert!(start >= 2);
    debug_assert!(length > 0);
    debug_assert!(
        small_primes.len() as u64 > (start as u64 + length as u64 - 1).isqrt(),
        "small-primes sieve too short to cover the segment's factors"
    );

    let mut segment = RangeSieve::new(start, length)
        .with_context(|| format!("segment sieve at start {}", start))?;

    for p in small_primes.prime_indices() {
        let p = p as i64;

        // Offset within the segment of the first multiple of p at or after
        // start.
        let mut kp = start % p;
        if kp != 0 {
            kp = p - kp;
        }
        // If that multiple is p itself, advance one stride so the prime at
        // the head of the segment does not strike itself. The sum is formed
        // in u64: start can sit near i64::MAX while kp < p.
        if start as u64 + kp as u64 == p as u64 {
            kp += p;
        }

        let mut idx = kp;
        while idx < length {
            segment.mark_composite(idx as usize);
            idx += p;
        }
    }

    #[cfg(feature = "cross-validate")]
    verify_against_trial_division(&segment);

    let count = segment.count_primes();
    trace!(start, length, count, "segment counted");
    Ok(count)
}

/// Assert every finished segment entry against the trial-division oracle.
/// Validation builds only.
#[cfg(feature = "cross-validate")]
fn verify_against_trial_division(segment: &RangeSieve) {
    use crate::trialdiv;
    for i in 0..segment.len() {
        let value = segment.base() + i as i64;
        assert_eq!(
            segment.is_prime(i),
            trialdiv::is_prime(value),
            "segment sieve disagrees with trial division at {}",
            value
        );
    }
}
