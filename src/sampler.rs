//! Uniform sampling building blocks. Every function takes the random stream
//! as an explicit argument; callers that want reproducible output pass a
//! seeded rng, callers that do not can pass `small_thread_rng()`.

use std::collections::HashSet;

use rand::Rng;

use crate::error::RandError;

const ALPHA_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A uniform draw from the closed interval `[x, y]`.
///
/// An equal-bounds range returns `x` without consuming a draw, so degenerate
/// ranges do not advance the stream.
pub fn urand_int<T, R>(rng: &mut R, x: T, y: T) -> T
where
    T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    assert!(x <= y);
    if x == y {
        return x;
    }
    rng.random_range(x..=y)
}

/// A uniform draw from `[x, y]` that never returns `excluding`.
pub fn urand_int_excluding<R: Rng>(rng: &mut R, x: u64, y: u64, excluding: u64) -> u64 {
    assert!(x < y);
    assert!(x <= excluding && excluding <= y);

    // Draw one value short of the full range, then shift past the hole.
    let mut num = urand_int(rng, x, y - 1);
    if num >= excluding {
        num += 1;
    }
    num
}

/// A uniform draw over all values in `[minimum, maximum]` representable with
/// exactly `decimal_places` decimal digits. The bounds are scaled with
/// round-half-up, the draw is an exact integer, and only the final division
/// back is floating-point.
pub fn urand_fixed_point<R: Rng>(
    rng: &mut R,
    decimal_places: u32,
    minimum: f64,
    maximum: f64,
) -> f64 {
    assert!(decimal_places > 0);
    assert!(minimum < maximum);

    let multiplier = 10i64.pow(decimal_places);
    let int_min = (minimum * multiplier as f64 + 0.5) as i64;
    let int_max = (maximum * multiplier as f64 + 0.5) as i64;
    urand_int(rng, int_min, int_max) as f64 / multiplier as f64
}

/// Selects `num_unique` distinct values from `[minimum, maximum]`.
///
/// Requests exceeding the range size fail with `RangeTooSmall` before any
/// draw is made. Dense requests (more than half the range) are served by a
/// partial shuffle of the materialized range, so termination never depends
/// on rejection luck; sparse requests use draw-and-retry.
pub fn select_unique_ids<R: Rng>(
    rng: &mut R,
    num_unique: u64,
    minimum: u64,
    maximum: u64,
) -> Result<HashSet<u64>, RandError> {
    assert!(minimum <= maximum);
    let range_size = maximum - minimum + 1;
    if num_unique > range_size {
        return Err(RandError::RangeTooSmall {
            num_unique,
            range_size,
        });
    }

    if num_unique > range_size / 2 {
        let mut pool: Vec<u64> = (minimum..=maximum).collect();
        let take = num_unique as usize;
        for i in 0..take {
            let j = urand_int(rng, i, pool.len() - 1);
            if j != i {
                pool.swap(i, j);
            }
        }
        return Ok(pool[..take].iter().copied().collect());
    }

    let mut rows = HashSet::with_capacity(num_unique as usize);
    while (rows.len() as u64) < num_unique {
        rows.insert(urand_int(rng, minimum, maximum));
    }
    Ok(rows)
}

/// A random lowercase alphabetic string with length in `[min_len, max_len]`.
pub fn make_random_astring<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> String {
    let len = urand_int(rng, min_len, max_len);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(ALPHA_CHARSET[urand_int(rng, 0, ALPHA_CHARSET.len() - 1)] as char);
    }
    out
}

/// A random numeric string with length in `[min_len, max_len]`.
pub fn make_random_nstring<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> String {
    let len = urand_int(rng, min_len, max_len);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(urand_int(rng, b'0', b'9') as char);
    }
    out
}

/// One `make_random_astring` per index pair of the parallel length slices.
pub fn make_random_astrings<R: Rng>(
    rng: &mut R,
    min_lens: &[usize],
    max_lens: &[usize],
) -> Vec<String> {
    assert_eq!(min_lens.len(), max_lens.len());
    min_lens
        .iter()
        .zip(max_lens)
        .map(|(&lo, &hi)| make_random_astring(rng, lo, hi))
        .collect()
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    let s = items.len();
    if s < 2 {
        return;
    }
    for i in 0..(s - 1) {
        let j = rng.random_range(0..=s - i - 1);
        if j != 0 {
            items.swap(i, i + j);
        }
    }
}
