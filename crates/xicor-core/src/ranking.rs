//! Sorting and ranking with explicit tie handling
//!
//! All functions sort with [`f64::total_cmp`] and group values with `==`, so
//! `-0.0` and `0.0` land in the same tie block. Inputs are expected to be
//! NaN-free (see [`crate::preprocess`]); a NaN never compares equal and
//! always forms a tie block of its own.
//!
//! Randomized functions take the random source as an argument. Seeding that
//! source reproduces every tie resolution.

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;
use tracing::trace;

/// Indices of `values` in ascending order
///
/// The sort is stable, so equal values keep their original relative order.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
    order
}

/// Maximal runs of equal values along a sorted order
///
/// Returns half-open ranges of positions into `order`; singletons are
/// included, so the ranges partition `0..order.len()`.
pub fn tie_blocks(values: &[f64], order: &[usize]) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for pos in 1..=order.len() {
        if pos == order.len() || values[order[pos]] != values[order[start]] {
            blocks.push(start..pos);
            start = pos;
        }
    }
    blocks
}

/// Ascending argsort with every tie block shuffled uniformly at random
///
/// The result satisfies `values[ord[0]] <= values[ord[1]] <= …`. Distinct
/// values keep their strict ascending order and the membership of each tie
/// block is fixed; only the order inside a block varies between calls. When
/// all values are distinct the result is deterministic.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use xicor_core::ranking::argsort_ties;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(argsort_ties(&[3.0, 1.0, 2.0], &mut rng), vec![1, 2, 0]);
/// ```
pub fn argsort_ties<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> Vec<usize> {
    let mut order = argsort(values);
    let mut shuffled = 0usize;
    for block in tie_blocks(values, &order) {
        if block.len() > 1 {
            order[block].shuffle(rng);
            shuffled += 1;
        }
    }
    trace!(n = values.len(), tie_blocks = shuffled, "shuffled tie blocks");
    order
}

/// 1-based ranks with ties broken uniformly at random
///
/// Positions of the sorted copy are pooled per distinct value. Walking the
/// input in its original order, each element draws one position from its
/// value's remaining pool without replacement. The result is always a
/// permutation of `1..=n`, and tied elements receive distinct positions from
/// the same contiguous pool.
pub fn rank_random<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> Vec<f64> {
    let order = argsort(values);
    let blocks = tie_blocks(values, &order);

    let mut block_of = vec![0usize; values.len()];
    let mut pools: Vec<Vec<usize>> = Vec::with_capacity(blocks.len());
    for (id, block) in blocks.into_iter().enumerate() {
        for pos in block.clone() {
            block_of[order[pos]] = id;
        }
        pools.push(block.map(|pos| pos + 1).collect());
    }
    trace!(n = values.len(), distinct = pools.len(), "random tie-break ranks");

    let mut ranks = vec![0.0; values.len()];
    for (i, rank) in ranks.iter_mut().enumerate() {
        let pool = &mut pools[block_of[i]];
        let drawn = if pool.len() == 1 {
            pool[0]
        } else {
            let k = rng.gen_range(0..pool.len());
            pool.swap_remove(k)
        };
        *rank = drawn as f64;
    }
    ranks
}

/// 1-based ranks with every tie mapped to the largest position of its block
///
/// `rank_max(v)[i]` is the number of `j` with `v[j] <= v[i]`; applied to the
/// negated sequence it counts the `j` with `v[j] >= v[i]`. Deterministic.
///
/// ```rust
/// use xicor_core::ranking::rank_max;
///
/// assert_eq!(rank_max(&[0.0, 2.0, 3.0, 2.0]), vec![1.0, 3.0, 4.0, 3.0]);
/// ```
pub fn rank_max(values: &[f64]) -> Vec<f64> {
    let order = argsort(values);
    let mut ranks = vec![0.0; values.len()];
    for block in tie_blocks(values, &order) {
        let top = block.end as f64;
        for pos in block {
            ranks[order[pos]] = top;
        }
    }
    ranks
}
