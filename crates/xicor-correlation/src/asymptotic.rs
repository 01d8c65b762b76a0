//! Asymptotic p-values based on the large-sample normal limit of xi
//!
//! Under independence `√n · ξ` is asymptotically normal with mean zero. For
//! continuous `y` its variance is 2/5; with ties in `y` the variance depends
//! on the tie structure and is estimated from the sorted `f` terms.

use crate::{CorrelationContext, Method, SignificanceEstimator};
use rand::Rng;
use tracing::debug;
use xicor_core::math::{cumulative_sum, mean};
use xicor_core::{normal, Error, Result};

/// Limiting variance of `√n · ξ` for continuous `y`
pub const NO_TIES_VARIANCE: f64 = 2.0 / 5.0;

/// Asymptotic significance estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsymptoticTest {
    assume_ties: bool,
}

impl Default for AsymptoticTest {
    fn default() -> Self {
        Self::tie_aware()
    }
}

impl AsymptoticTest {
    /// Variance estimated from the tie structure of `y`
    ///
    /// Also valid without ties; the default.
    pub fn tie_aware() -> Self {
        Self { assume_ties: true }
    }

    /// Fixed variance 2/5, exact only for continuous `y`
    pub fn without_ties() -> Self {
        Self { assume_ties: false }
    }

    /// Build from the `assume_ties` configuration flag
    pub fn new(assume_ties: bool) -> Self {
        Self { assume_ties }
    }

    /// Whether the tie-aware variance is used
    pub fn assume_ties(&self) -> bool {
        self.assume_ties
    }

    /// Asymptotic variance of `√n · ξ` for this context
    pub fn variance(&self, context: &CorrelationContext) -> f64 {
        if self.assume_ties {
            tie_aware_variance(context)
        } else {
            NO_TIES_VARIANCE
        }
    }
}

impl SignificanceEstimator for AsymptoticTest {
    fn p_value<R: Rng + ?Sized>(&self, context: &CorrelationContext, _rng: &mut R) -> Result<f64> {
        let variance = self.variance(context);
        if !(variance > 0.0 && variance.is_finite()) {
            return Err(Error::degenerate("asymptotic variance"));
        }

        let n = context.n() as f64;
        let z = n.sqrt() * context.xi() / variance.sqrt();
        debug!(variance, z, assume_ties = self.assume_ties, "asymptotic test statistic");

        Ok(normal::sf(z))
    }

    fn method(&self) -> Method {
        Method::Asymptotic
    }
}

fn tie_aware_variance(context: &CorrelationContext) -> f64 {
    let n = context.n() as f64;

    let mut q = context.f().to_vec();
    q.sort_by(|a, b| a.total_cmp(b));

    // ind = i + 1 and ind2 = 2n - 2 ind + 1 runs 2n - 1, 2n - 3, ..., 1
    let ind: Vec<f64> = (1..=q.len()).map(|i| i as f64).collect();
    let ind2: Vec<f64> = ind.iter().map(|i| 2.0 * n - 2.0 * i + 1.0).collect();

    let weighted_sq: Vec<f64> = ind2.iter().zip(&q).map(|(w, qi)| w * qi * qi).collect();
    let weighted: Vec<f64> = ind2.iter().zip(&q).map(|(w, qi)| w * qi).collect();
    let a = mean(&weighted_sq) / n;
    let c = mean(&weighted) / n;

    let cq = cumulative_sum(&q);
    let m_sq: Vec<f64> = cq
        .iter()
        .zip(&ind)
        .zip(&q)
        .map(|((cqi, i), qi)| {
            let m = (cqi + (n - i) * qi) / n;
            m * m
        })
        .collect();
    let b = mean(&m_sq);

    let cval = context.cval();
    (a - 2.0 * b + c * c) / (cval * cval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xi_statistic;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn linear_context() -> CorrelationContext {
        let x: Vec<f64> = (1..=10).map(f64::from).collect();
        let y: Vec<f64> = (5..=14).map(f64::from).collect();
        xi_statistic(&x, &y, &mut ChaCha8Rng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn test_no_ties_formula() {
        let context = linear_context();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let p = AsymptoticTest::without_ties().p_value(&context, &mut rng).unwrap();
        assert_abs_diff_eq!(p, 0.000138257, epsilon = 1e-8);
    }

    #[test]
    fn test_tie_aware_formula() {
        let context = linear_context();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let p = AsymptoticTest::tie_aware().p_value(&context, &mut rng).unwrap();
        assert_abs_diff_eq!(p, 0.0001879616, epsilon = 1e-8);
    }

    #[test]
    fn test_variance_selection() {
        let context = linear_context();
        assert_eq!(AsymptoticTest::without_ties().variance(&context), NO_TIES_VARIANCE);
        assert_ne!(AsymptoticTest::tie_aware().variance(&context), NO_TIES_VARIANCE);
        assert_eq!(AsymptoticTest::default(), AsymptoticTest::new(true));
        assert_eq!(AsymptoticTest::tie_aware().method(), Method::Asymptotic);
    }

    #[test]
    fn test_zero_variance_is_degenerate() {
        // Constant f: a = b = c = 1, so the tie-aware variance vanishes
        let context = CorrelationContext::from_parts(0.5, vec![1.0; 3], 0.1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(AsymptoticTest::tie_aware().variance(&context), 0.0);
        let err = AsymptoticTest::tie_aware().p_value(&context, &mut rng).unwrap_err();
        assert_eq!(err, Error::degenerate("asymptotic variance"));

        // The fixed variance does not depend on f
        assert!(AsymptoticTest::without_ties().p_value(&context, &mut rng).is_ok());
    }

    #[test]
    fn test_two_point_variance_is_positive() {
        let context =
            xi_statistic(&[1.0, 2.0], &[3.0, 4.0], &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        // a = 0.4375, b = 0.40625, c = 0.625, cval = 0.125
        assert_abs_diff_eq!(
            AsymptoticTest::tie_aware().variance(&context),
            0.015625 / 0.015625,
            epsilon = 1e-12
        );
    }
}
