//! Core trait for significance estimation

use crate::{CorrelationContext, Method};
use rand::Rng;
use xicor_core::Result;

/// Turns a finished correlation run into a one-sided p-value
///
/// The context is passed in explicitly rather than stored, so an estimator
/// can never see a stale or missing correlation result. Estimators that do
/// not need randomness ignore `rng`.
pub trait SignificanceEstimator {
    /// P-value for the null hypothesis that `y` does not depend on `x`
    fn p_value<R: Rng + ?Sized>(&self, context: &CorrelationContext, rng: &mut R) -> Result<f64>;

    /// The method this estimator implements
    fn method(&self) -> Method;
}
