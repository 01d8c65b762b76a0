//! Chatterjee's xi correlation coefficient
//!
//! Xi measures how much `y` is a function of `x`. It is 0 when the two are
//! independent and approaches 1 when `y` is a measurable function of `x`,
//! whether or not that function is monotone. Unlike most rank correlations
//! it is not symmetric: `xi(x, y)` and `xi(y, x)` answer different questions.
//!
//! This crate provides:
//!
//! - **Correlation engine**: the coefficient plus the `y`-only terms reused
//!   by significance estimation ([`xi_statistic`], [`CorrelationContext`])
//! - **Asymptotic p-values**: closed-form normal limit, with or without a
//!   tie correction ([`AsymptoticTest`])
//! - **Permutation p-values**: Monte-Carlo null distribution on any
//!   execution engine, with cancellation ([`PermutationTest`])
//! - **High-level API**: [`XiCorrelation`], [`xi_correlation`], [`xi_significance`]
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use xicor_correlation::{xi_significance, XiConfig};
//!
//! let x = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
//! let y = [9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74];
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let result = xi_significance(&x, &y, &XiConfig::default(), &mut rng).unwrap();
//! assert!((result.xi - 0.6).abs() < 1e-12);
//! assert!(result.p_value < 0.01);
//! ```

pub mod api;
mod asymptotic;
mod config;
mod engine;
mod permutation;
mod traits;

// Re-exports
pub use api::{xi_correlation, xi_significance, XiCorrelation, XiSignificance};
pub use asymptotic::{AsymptoticTest, NO_TIES_VARIANCE};
pub use config::{Method, XiConfig, DEFAULT_TRIALS};
pub use engine::{xi_statistic, CorrelationContext, MIN_SAMPLES};
pub use permutation::PermutationTest;
pub use traits::SignificanceEstimator;
pub use xicor_core::{CancellationToken, Error, Result};
