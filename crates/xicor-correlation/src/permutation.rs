//! Permutation p-values
//!
//! Each trial replaces `x` with independent uniform draws, which destroys any
//! dependence on `y` while keeping the tie structure of `y`, and recomputes
//! xi. The p-value is the share of trials whose xi exceeds the observed one.
//!
//! Trials are independent, so they are handed to an [`ExecutionEngine`] as a
//! batch. Every trial seeds its own generator from a base seed drawn from the
//! caller's random source, so the result does not depend on how the engine
//! schedules the trials.

use crate::config::DEFAULT_TRIALS;
use crate::{CorrelationContext, Method, SignificanceEstimator};
use rand::prelude::*;
use tracing::{debug, instrument, warn};
use xicor_core::{CancellationToken, Error, ExecutionEngine, Result, SequentialEngine};

/// Permutation significance estimator
#[derive(Debug, Clone)]
pub struct PermutationTest<E = SequentialEngine> {
    engine: E,
    n_trials: usize,
    cancellation: CancellationToken,
}

impl Default for PermutationTest<SequentialEngine> {
    fn default() -> Self {
        Self::new(SequentialEngine::new())
    }
}

impl<E: ExecutionEngine> PermutationTest<E> {
    /// Create a permutation test running on `engine`
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            n_trials: DEFAULT_TRIALS,
            cancellation: CancellationToken::new(),
        }
    }

    /// Set the number of trials
    pub fn with_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Stop launching trials once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Number of trials
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Xi of every trial, in trial order
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] for zero trials, [`Error::Cancelled`] if the
    /// token fired before every trial ran.
    #[instrument(skip(self, context, rng), fields(n = context.n(), n_trials = self.n_trials))]
    pub fn null_distribution<R: Rng + ?Sized>(
        &self,
        context: &CorrelationContext,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        if self.n_trials == 0 {
            return Err(Error::InvalidParameter(
                "Number of permutation trials must be positive".to_string(),
            ));
        }

        let base_seed: u64 = rng.gen();
        let n = context.n();
        debug!("Running {} permutation trials", self.n_trials);

        let outcomes: Vec<Option<Result<f64>>> = self.engine.execute_batch(self.n_trials, |trial| {
            if self.cancellation.is_cancelled() {
                return None;
            }
            let mut trial_rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64));
            let surrogate: Vec<f64> = (0..n).map(|_| trial_rng.gen::<f64>()).collect();
            Some(context.xi_against(&surrogate, &mut trial_rng))
        });

        let mut trial_xis = Vec::with_capacity(self.n_trials);
        for outcome in outcomes.into_iter().flatten() {
            trial_xis.push(outcome?);
        }

        if trial_xis.len() < self.n_trials {
            warn!(
                completed = trial_xis.len(),
                requested = self.n_trials,
                "permutation run cancelled"
            );
            return Err(Error::Cancelled {
                completed: trial_xis.len(),
                requested: self.n_trials,
            });
        }

        Ok(trial_xis)
    }
}

impl<E: ExecutionEngine> SignificanceEstimator for PermutationTest<E> {
    fn p_value<R: Rng + ?Sized>(&self, context: &CorrelationContext, rng: &mut R) -> Result<f64> {
        let observed = context.xi();
        let trial_xis = self.null_distribution(context, rng)?;

        let exceeding = trial_xis.iter().filter(|&&xi| xi > observed).count();
        debug!(exceeding, n_trials = trial_xis.len(), "permutation test finished");

        Ok(exceeding as f64 / trial_xis.len() as f64)
    }

    fn method(&self) -> Method {
        Method::Permutation
    }
}
