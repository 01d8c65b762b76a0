//! Chatterjee's xi correlation
//!
//! This crate re-exports the xicor workspace:
//!
//! - [`core`]: preprocessing, ranking, the normal CDF and execution engines
//! - [`correlation`]: the xi coefficient and its significance tests
//!
//! # Quick start
//!
//! ```rust
//! use xicor::prelude::*;
//!
//! let x: Vec<f64> = (0..50).map(|i| f64::from(i) / 5.0 - 5.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| v * v).collect();
//!
//! // A parabola: no linear correlation, but y is a function of x
//! let xi = XiCorrelation::new(&x, &y, XiConfig::default().with_seed(3)).unwrap();
//! let result = xi.significance().unwrap();
//! assert!(result.xi > 0.8);
//! assert!(result.is_significant(0.001));
//! ```

pub use xicor_core as core;
pub use xicor_correlation as correlation;

pub use xicor_core::{CancellationToken, Error, Result};
pub use xicor_correlation::{
    xi_correlation, xi_significance, Method, XiConfig, XiCorrelation, XiSignificance,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use xicor_core::prelude::*;
    pub use xicor_correlation::{
        xi_correlation, xi_significance, AsymptoticTest, CorrelationContext, Method,
        PermutationTest, SignificanceEstimator, XiConfig, XiCorrelation, XiSignificance,
    };
}
