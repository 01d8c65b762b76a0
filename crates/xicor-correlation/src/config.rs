//! Configuration for xi correlation and significance estimation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use xicor_core::{Error, Result};

/// Default number of permutation trials
pub const DEFAULT_TRIALS: usize = 1000;

/// How the p-value is estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Closed-form large-sample variance
    #[default]
    Asymptotic,
    /// Monte-Carlo comparison against surrogate samples
    Permutation,
}

impl Method {
    /// Lowercase method name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asymptotic => "asymptotic",
            Self::Permutation => "permutation",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asymptotic" => Ok(Self::Asymptotic),
            "permutation" => Ok(Self::Permutation),
            _ => Err(Error::invalid_method(s)),
        }
    }
}

/// Settings for one correlation/significance computation
///
/// The defaults compute an asymptotic p-value with the tie-aware variance,
/// which is valid whether or not the data actually contain ties.
///
/// ```rust
/// use xicor_correlation::{Method, XiConfig};
///
/// let config = XiConfig::default().with_permutation_pvalue(500).with_seed(7);
/// assert_eq!(config.method, Method::Permutation);
/// assert_eq!(config.n_trials, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XiConfig {
    /// Significance method
    pub method: Method,
    /// Number of permutation trials
    pub n_trials: usize,
    /// Use the tie-aware asymptotic variance
    pub assume_ties: bool,
    /// Whether a p-value may be computed at all
    pub want_pvalue: bool,
    /// Seed for the convenience entry points; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for XiConfig {
    fn default() -> Self {
        Self {
            method: Method::Asymptotic,
            n_trials: DEFAULT_TRIALS,
            assume_ties: true,
            want_pvalue: true,
            seed: None,
        }
    }
}

impl XiConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate the p-value from asymptotic theory
    pub fn with_asymptotic_pvalue(mut self) -> Self {
        self.want_pvalue = true;
        self.method = Method::Asymptotic;
        self
    }

    /// Estimate the p-value from `n_trials` permutations
    pub fn with_permutation_pvalue(mut self, n_trials: usize) -> Self {
        self.want_pvalue = true;
        self.method = Method::Permutation;
        self.n_trials = n_trials;
        self
    }

    /// Declare the data tie-free and use the simpler asymptotic variance
    pub fn without_ties(mut self) -> Self {
        self.want_pvalue = true;
        self.assume_ties = false;
        self
    }

    /// Only the coefficient is wanted; significance requests will fail
    pub fn without_pvalue(mut self) -> Self {
        self.want_pvalue = false;
        self
    }

    /// Set the significance method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the significance method by name
    ///
    /// # Errors
    /// [`Error::InvalidMethod`] unless the name is `asymptotic` or `permutation`.
    pub fn with_method_name(self, name: &str) -> Result<Self> {
        Ok(self.with_method(name.parse()?))
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings before any computation runs
    pub fn validate(&self) -> Result<()> {
        if self.method == Method::Permutation && self.n_trials == 0 {
            return Err(Error::InvalidParameter(
                "Number of permutation trials must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
