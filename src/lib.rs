//! # primespan — Segmented Prime Counting
//!
//! Counts the primes in an arbitrary half-open interval
//! `[start, start + length)` of nonnegative integers below 2^63, in bounded
//! memory regardless of interval size, using a segmented Sieve of
//! Eratosthenes.
//!
//! ## Two-Level Sieve
//!
//! 1. **Small primes** ([`small_primes`]): one classical sieve per query,
//!    covering every possible prime factor of every composite in the target
//!    interval (at worst `[0, 3_037_000_500)`, just past `isqrt(2^63 - 1)`).
//! 2. **Segments** ([`segment`]): the target interval is walked in chunks of
//!    at most a configured maximum length. Each chunk gets a fresh
//!    [`sieve::RangeSieve`], every small prime is struck through it, and the
//!    survivors are counted.
//!
//! Peak memory is the small-primes sieve plus one segment (a few hundred
//! MiB at worst) while the interval itself may span the entire domain.
//!
//! ## Entry Points
//!
//! [`count_primes_in_interval`] counts with the default segment length;
//! [`IntervalCounter`] makes the segment length explicit configuration.
//! Both are total over the logical input domain: empty, negative-length and
//! below-2 intervals count zero rather than erroring. Errors are reserved
//! for allocation failure and endpoints outside the domain, and are fatal to
//! the query; there is no retry path.
//!
//! The whole pipeline is strictly sequential; each sieve has a single owner
//! from creation to drop.

pub mod interval;
pub mod segment;
pub mod sieve;
pub mod small_primes;
pub mod trialdiv;

pub use interval::{count_primes_in_interval, IntervalCounter, DEFAULT_MAX_SEGMENT_LENGTH};
