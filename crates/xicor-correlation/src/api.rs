//! High-level API for xi correlation
//!
//! [`XiCorrelation`] bundles a sample pair with its [`XiConfig`] and runs the
//! full pipeline: paired-NaN removal, the correlation engine and, on request,
//! a significance estimator. The free functions [`xi_correlation`] and
//! [`xi_significance`] do the same for one-off computations.

use crate::{
    xi_statistic, AsymptoticTest, CorrelationContext, Method, PermutationTest,
    SignificanceEstimator, XiConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, instrument};
use xicor_core::{
    has_nan_pairs, remove_nan_pairs, CancellationToken, Error, ExecutionEngine, Result,
    SequentialEngine,
};

/// Coefficient and p-value of one significance run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XiSignificance {
    /// Xi coefficient
    pub xi: f64,
    /// One-sided p-value for independence
    pub p_value: f64,
    /// Number of pairs left after NaN removal
    pub n: usize,
    /// Method that produced the p-value
    pub method: Method,
}

impl XiSignificance {
    /// Whether independence is rejected at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

impl fmt::Display for XiSignificance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xi = {:.6}, p = {:.6} (n = {}, {})",
            self.xi, self.p_value, self.n, self.method
        )
    }
}

/// A sample pair together with the settings to analyse it
///
/// ```rust
/// use xicor_correlation::{XiConfig, XiCorrelation};
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let y: Vec<f64> = x.iter().map(|v| v + 4.0).collect();
///
/// let xi = XiCorrelation::new(&x, &y, XiConfig::default().with_seed(1)).unwrap();
/// let result = xi.significance().unwrap();
/// assert!((result.xi - 0.7272727).abs() < 1e-6);
/// assert!(result.is_significant(0.01));
/// ```
#[derive(Debug, Clone)]
pub struct XiCorrelation {
    x: Vec<f64>,
    y: Vec<f64>,
    config: XiConfig,
}

impl XiCorrelation {
    /// Validate the inputs and store copies of both sequences
    ///
    /// # Errors
    /// [`Error::SizeMismatch`] for sequences of different lengths and
    /// [`Error::InvalidParameter`] for an invalid configuration.
    pub fn new(x: &[f64], y: &[f64], config: XiConfig) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len()));
        }
        config.validate()?;

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &XiConfig {
        &self.config
    }

    /// Xi coefficient, using the configured seed or OS entropy
    pub fn correlation(&self) -> Result<f64> {
        self.correlation_with_rng(&mut self.rng())
    }

    /// Xi coefficient, drawing tie resolutions from `rng`
    pub fn correlation_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        Ok(self.context_with_rng(rng)?.xi())
    }

    /// Full engine output for the NaN-filtered sample
    pub fn context_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CorrelationContext> {
        if !has_nan_pairs(&self.x, &self.y) {
            return xi_statistic(&self.x, &self.y, rng);
        }
        let (x, y) = remove_nan_pairs(&self.x, &self.y)?;
        debug!(dropped = self.x.len() - x.len(), "removed NaN pairs");
        xi_statistic(&x, &y, rng)
    }

    /// Coefficient and p-value, using the configured seed or OS entropy
    pub fn significance(&self) -> Result<XiSignificance> {
        self.significance_with_rng(&mut self.rng())
    }

    /// Coefficient and p-value, drawing all randomness from `rng`
    ///
    /// # Errors
    /// [`Error::PvalueNotRequested`] when the configuration disables p-values,
    /// plus every error of [`XiCorrelation::correlation_with_rng`].
    pub fn significance_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<XiSignificance> {
        self.significance_with_engine(SequentialEngine::new(), CancellationToken::new(), rng)
    }

    /// Like [`XiCorrelation::significance_with_rng`], but permutation trials
    /// stop once `token` is cancelled, failing with [`Error::Cancelled`]
    pub fn significance_with_cancel<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        token: CancellationToken,
    ) -> Result<XiSignificance> {
        self.significance_with_engine(SequentialEngine::new(), token, rng)
    }

    /// Coefficient and p-value with permutation trials run on `engine`
    ///
    /// The p-value for a given random source is the same on every engine.
    #[instrument(skip(self, engine, token, rng), fields(n = self.x.len(), method = %self.config.method))]
    pub fn significance_with_engine<E, R>(
        &self,
        engine: E,
        token: CancellationToken,
        rng: &mut R,
    ) -> Result<XiSignificance>
    where
        E: ExecutionEngine,
        R: Rng + ?Sized,
    {
        if !self.config.want_pvalue {
            return Err(Error::PvalueNotRequested);
        }

        let context = self.context_with_rng(rng)?;
        let p_value = match self.config.method {
            Method::Asymptotic => AsymptoticTest::new(self.config.assume_ties).p_value(&context, rng)?,
            Method::Permutation => PermutationTest::new(engine)
                .with_trials(self.config.n_trials)
                .with_cancellation(token)
                .p_value(&context, rng)?,
        };

        Ok(XiSignificance {
            xi: context.xi(),
            p_value,
            n: context.n(),
            method: self.config.method,
        })
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Xi coefficient of `y` on `x` with NaN pairs removed
///
/// # Example
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use xicor_correlation::xi_correlation;
///
/// let x = [1.0, 2.0, f64::NAN, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let xi = xi_correlation(&x, &y, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert!((xi - 0.4).abs() < 1e-12);
/// ```
pub fn xi_correlation<R: Rng + ?Sized>(x: &[f64], y: &[f64], rng: &mut R) -> Result<f64> {
    let (x, y) = remove_nan_pairs(x, y)?;
    Ok(xi_statistic(&x, &y, rng)?.xi())
}

/// Xi coefficient and p-value of `y` on `x` under `config`
///
/// The configured seed is ignored; all randomness comes from `rng`.
#[instrument(skip(x, y, rng), fields(len = x.len()))]
pub fn xi_significance<R: Rng + ?Sized>(
    x: &[f64],
    y: &[f64],
    config: &XiConfig,
    rng: &mut R,
) -> Result<XiSignificance> {
    XiCorrelation::new(x, y, config.clone())?.significance_with_rng(rng)
}
