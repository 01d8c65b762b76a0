//! The xi correlation statistic
//!
//! For a sample `(x_i, y_i)` of size `n`, order the pairs by `x` and let
//! `r_i` be the number of `y_j <= y_(i)` along that order. Chatterjee's
//! coefficient is
//!
//! ```text
//! ξ = 1 - n Σ |r_(i+1) - r_i| / (2 Σ l_i (n - l_i))
//! ```
//!
//! where `l_i` counts the `y_j >= y_i`. Ties in `x` are broken at random and
//! ties in `y` use maximal ranks, so the statistic stays valid for discrete
//! data.

use rand::Rng;
use tracing::trace;
use xicor_core::math::mean;
use xicor_core::{argsort_ties, rank_max, rank_random, Error, Result};

/// Smallest sample for which xi is defined
pub const MIN_SAMPLES: usize = 2;

/// Result of one run of the correlation engine
///
/// Besides the coefficient, the context keeps the terms that depend only on
/// `y` (`f` and `cval`), which the significance estimators reuse. It is
/// immutable and owned by the caller that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationContext {
    xi: f64,
    f: Vec<f64>,
    cval: f64,
}

impl CorrelationContext {
    /// The xi coefficient
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Sample size after preprocessing
    pub fn n(&self) -> usize {
        self.f.len()
    }

    /// `f[i]`: number of `j` with `y[j] <= y[i]`, divided by `n`
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Mean of `g (1 - g)` where `g[i]` counts the `j` with `y[j] >= y[i]`, divided by `n`
    pub fn cval(&self) -> f64 {
        self.cval
    }

    /// Xi of a new `x` sample against the same `y`
    ///
    /// Equivalent to running [`xi_statistic`] on `(x, y)` with the `y` that
    /// produced this context, without re-ranking `y`.
    pub fn xi_against<R: Rng + ?Sized>(&self, x: &[f64], rng: &mut R) -> Result<f64> {
        if x.len() != self.n() {
            return Err(Error::size_mismatch(x.len(), self.n()));
        }
        Ok(xi_from_response(x, &self.f, self.cval, rng))
    }

    /// Assemble a context from raw terms, bypassing the ranking step
    #[cfg(test)]
    pub(crate) fn from_parts(xi: f64, f: Vec<f64>, cval: f64) -> Self {
        Self { xi, f, cval }
    }
}

/// Compute the xi coefficient of `y` on `x`
///
/// Inputs must already be free of NaN pairs. Repeated calls on data with ties
/// in `x` may return slightly different values because of the random tie
/// resolution; tie-free input always yields the same value.
///
/// # Errors
/// - [`Error::SizeMismatch`] if the lengths differ
/// - [`Error::InsufficientData`] if fewer than two pairs are given
/// - [`Error::DegenerateInput`] if `y` is constant, which makes `cval` zero
pub fn xi_statistic<R: Rng + ?Sized>(x: &[f64], y: &[f64], rng: &mut R) -> Result<CorrelationContext> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len()));
    }
    let n = y.len();
    if n < MIN_SAMPLES {
        return Err(Error::InsufficientData {
            expected: MIN_SAMPLES,
            actual: n,
        });
    }
    let nf = n as f64;

    let f: Vec<f64> = rank_max(y).into_iter().map(|r| r / nf).collect();

    let negated: Vec<f64> = y.iter().map(|v| -v).collect();
    let g: Vec<f64> = rank_max(&negated).into_iter().map(|r| r / nf).collect();

    let spread: Vec<f64> = g.iter().map(|gi| gi * (1.0 - gi)).collect();
    let cval = mean(&spread);
    if !(cval > 0.0 && cval.is_finite()) {
        return Err(Error::degenerate("cval"));
    }

    let xi = xi_from_response(x, &f, cval, rng);
    Ok(CorrelationContext { xi, f, cval })
}

/// Xi given the precomputed `y` terms
fn xi_from_response<R: Rng + ?Sized>(x: &[f64], f: &[f64], cval: f64, rng: &mut R) -> f64 {
    let n = f.len() as f64;

    let pi = rank_random(x, rng);
    // pi is a permutation, so this is a plain argsort of the random x-ranks
    let ord = argsort_ties(&pi, rng);

    let diffs: Vec<f64> = ord
        .windows(2)
        .map(|pair| (f[pair[0]] - f[pair[1]]).abs())
        .collect();
    let a1 = mean(&diffs) * (n - 1.0) / (2.0 * n);

    trace!(a1, cval, "xi terms");
    1.0 - a1 / cval
}
