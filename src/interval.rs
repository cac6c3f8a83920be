//! # Interval Driver — Normalization and the Segmentation Loop
//!
//! The public entry point of the crate. Validates and normalizes the
//! requested interval, builds the small-primes sieve once, then walks the
//! interval in segments of at most a configured maximum length, summing the
//! per-segment counts.
//!
//! Peak memory is bounded by the small-primes sieve plus a single segment
//! sieve, independent of how large the requested interval is; that bound is
//! the entire point of segmenting instead of sieving the whole interval at
//! once.

use anyhow::{ensure, Result};
use tracing::debug;

use crate::segment::count_primes_in_segment;
use crate::small_primes;

/// Default maximum length of one segment sieve. 2^30 entries is 128 MiB of
/// packed flags, keeping peak memory in the low hundreds of MiB even for
/// queries near the top of the domain.
pub const DEFAULT_MAX_SEGMENT_LENGTH: i64 = 1 << 30;

/// Exclusive upper limit of the representable domain: intervals must lie
/// within the nonnegative integers below 2^63.
const DOMAIN_END: i128 = 1 << 63;

/// Prime counting over arbitrary intervals, with the maximum segment length
/// as explicit configuration rather than a hidden global.
///
/// Segmentation is purely a memory-management device: any two counters
/// return identical totals for the same interval regardless of their
/// configured segment length.
#[derive(Clone, Copy, Debug)]
pub struct IntervalCounter {
    max_segment_length: i64,
}

impl Default for IntervalCounter {
    fn default() -> Self {
        IntervalCounter {
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
        }
    }
}

impl IntervalCounter {
    /// Create a counter with a custom maximum segment length (in entries).
    /// Rejects nonpositive lengths.
    pub fn new(max_segment_length: i64) -> Result<Self> {
        ensure!(
            max_segment_length > 0,
            "maximum segment length must be positive, got {}",
            max_segment_length
        );
        Ok(IntervalCounter { max_segment_length })
    }

    /// Configured maximum segment length.
    pub fn max_segment_length(&self) -> i64 {
        self.max_segment_length
    }

    /// Count the primes in `[start, start + length)`.
    ///
    /// Total over the logical input domain: nonpositive lengths and
    /// intervals lying entirely below 2 return `Ok(0)`, and a `start` below
    /// 2 is clamped upward (negative and sub-2 values are never prime, so
    /// dropping them cannot change the count of the rest).
    ///
    /// Errors are reserved for genuinely fatal conditions: an interval
    /// endpoint at or above 2^63 (outside the representable domain) or a
    /// sieve allocation failure. Neither has a retry path.
    pub fn count(&self, start: i64, length: i64) -> Result<i64> {
        // Empty or inverted interval.
        if length <= 0 {
            return Ok(0);
        }

        // The endpoint is formed in i128 so that no (start, length) pair
        // overflows before it is checked.
        let end = start as i128 + length as i128;

        // No integer >= 2, the smallest prime, lies in range.
        if end <= 2 {
            return Ok(0);
        }

        ensure!(
            end <= DOMAIN_END,
            "interval endpoint {} exceeds the domain of integers below 2^63",
            end
        );

        // Shrink from below so the smallest examined value is 2.
        let (mut start, mut length) = if start < 2 {
            (2, (end - 2) as i64)
        } else {
            (start, length)
        };

        let small = small_primes::find_small_primes(small_primes::bound_for(end as u64))?;

        debug!(
            start,
            length,
            max_segment_length = self.max_segment_length,
            "counting primes in interval"
        );

        let mut total: i64 = 0;
        while length > self.max_segment_length {
            total += count_primes_in_segment(start, self.max_segment_length, &small)?;
            start += self.max_segment_length;
            length -= self.max_segment_length;
        }
        // Final segment: the remainder is always positive after the checks
        // above, and at most max_segment_length.
        total += count_primes_in_segment(start, length, &small)?;

        Ok(total)
    }
}

/// Count the primes in `[start, start + length)` with the default segment
/// length. The one operation external collaborators need.
pub fn count_primes_in_interval(start: i64, length: i64) -> Result<i64> {
    IntervalCounter::default().count(start, length)
}
