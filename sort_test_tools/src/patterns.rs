use std::env;
use std::str::FromStr;

use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Provides a set of patterns useful for testing and benchmarking sorting algorithms.
/// Currently limited to i32 values.
///
/// Every pattern that involves randomness draws from the rng handed in by the caller, so a fixed
/// seed always reproduces the same values.

// --- Public ---

pub fn random(len: usize, rng: &mut StdRng) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R, rng: &mut StdRng) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    // Abstracting over ranges in Rust :(
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64, rng: &mut StdRng) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64, rng: &mut StdRng) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random(len, rng);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![0; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize, rng: &mut StdRng) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len, rng);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1, rng);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize, rng: &mut StdRng) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len, rng);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Picks the seed for a run: `explicit` if given, else the `OVERRIDE_SEED` environment variable,
/// else a fresh random one. Print the result, it is the only way to reproduce a failure.
pub fn resolve_seed(explicit: Option<u64>) -> u64 {
    explicit
        .or_else(|| {
            env::var("OVERRIDE_SEED")
                .ok()
                .map(|seed| u64::from_str(&seed).unwrap())
        })
        .unwrap_or_else(|| thread_rng().gen())
}

pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
