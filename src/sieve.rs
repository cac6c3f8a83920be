//! # RangeSieve — Packed Primality Flags for a Contiguous Range
//!
//! The storage layer shared by both levels of the segmented sieve: one
//! instance holds a candidate-primality flag for every integer in
//! `[base, base + length)`, addressed by the local index `i` denoting the
//! integer `base + i`.
//!
//! Flags are bit-packed into `u64` words, an 8× memory reduction over a
//! byte-per-flag layout. The worst-case small-primes sieve (every potential
//! prime factor below 2^63) fits in ~380 MiB instead of ~3 GiB, and a
//! default 2^30-entry segment costs 128 MiB. Survivor counting uses hardware
//! `POPCNT` (via `count_ones()`) for O(length/64) scans.
//!
//! Bit layout: flag `i` lives in word `i / 64`, bit position `i % 64`. A set
//! bit means the value is still **possibly prime**; a cleared bit means it
//! has been marked composite. Marking is one-way: nothing ever sets a bit
//! back.
//!
//! Every sieve starts with all flags set. Construction is the only fallible
//! operation: the backing store is reserved up front so an allocation
//! failure surfaces as an `Err` naming the requested size, instead of an
//! abort inside `Vec` growth. Out-of-range indexing is a programming error
//! (debug-asserted), not a runtime condition.

use anyhow::{ensure, Context, Result};

/// Packed primality-flag store for the integers in `[base, base + length)`.
pub struct RangeSieve {
    base: i64,
    words: Vec<u64>,
    len: usize,
}

impl RangeSieve {
    /// Create a sieve representing `[base, base + length)` with every entry
    /// initialized to "possibly prime".
    ///
    /// Fails if `length` is nonpositive or the word buffer cannot be
    /// allocated. Callers treat allocation failure as fatal: a smaller
    /// buffer would not satisfy the sieve's coverage requirement, so there
    /// is no retry path.
    pub fn new(base: i64, length: i64) -> Result<Self> {
        ensure!(length > 0, "sieve length must be positive, got {}", length);
        let len = length as usize;
        let num_words = len.div_ceil(64);

        let mut words: Vec<u64> = Vec::new();
        words.try_reserve_exact(num_words).with_context(|| {
            format!(
                "failed to allocate sieve backing store for {} entries ({} MiB)",
                length,
                (num_words * 8) >> 20
            )
        })?;
        words.resize(num_words, u64::MAX);

        // Clear unused high bits in the last word so popcount is exact.
        let extra = num_words * 64 - len;
        if extra > 0 {
            words[num_words - 1] >>= extra;
        }

        Ok(RangeSieve { base, words, len })
    }

    /// Lowest integer represented by this sieve.
    #[inline]
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Number of flags in this sieve.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Current flag for local index `index` (the integer `base + index`).
    ///
    /// # Panics
    /// Debug builds panic if `index >= len`.
    #[inline]
    pub fn is_prime(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "sieve index out of bounds: {} >= {}",
            index,
            self.len
        );
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Mark local index `index` (the integer `base + index`) composite.
    /// Idempotent: marking an already-composite entry is a no-op.
    #[inline]
    pub fn mark_composite(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Count the entries still flagged "possibly prime" using hardware POPCNT.
    pub fn count_primes(&self) -> i64 {
        self.words.iter().map(|w| w.count_ones() as i64).sum()
    }

    /// Iterate the local indices of all surviving entries in ascending order.
    pub fn prime_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let base = wi * 64;
            BitIter { word, base }
        })
    }
}

/// Iterator over set bits within a single u64 word.
struct BitIter {
    word: u64,
    base: usize,
}

impl Iterator for BitIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // clear lowest set bit
        Some(self.base + tz)
    }
}
