//! Mathematical utilities for xi correlation analysis
//!
//! This module provides the normal CDF used by the significance estimators
//! and the small reductions shared by the correlation engine.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use std::f64::consts::PI;

        /// Number of series terms accumulated after the leading `x` term
        pub const SERIES_TERMS: usize = 100;

        /// Beyond this magnitude the series is not evaluated and the CDF saturates
        pub const SERIES_LIMIT: f64 = 8.0;

        /// Calculate the cumulative distribution function (CDF) of the standard normal distribution
        ///
        /// Evaluates the Maclaurin-style series
        ///
        /// ```text
        /// Φ(x) = 1/2 + φ(x) · (x + x³/3 + x⁵/(3·5) + …)
        /// ```
        ///
        /// truncated after [`SERIES_TERMS`] terms. Every term is positive for
        /// `x > 0`, so there is no cancellation and the truncation error is
        /// negligible for `|x| < 8`, which covers every statistic the xi
        /// estimators produce in practice. Outside [`SERIES_LIMIT`] the function
        /// returns 0 or 1: the true tail mass there is below 1e-15, while the
        /// truncated series would no longer converge. This is not a
        /// general-purpose tail-probability routine.
        pub fn cdf(x: f64) -> f64 {
            if x.is_nan() {
                return f64::NAN;
            }
            if x < -SERIES_LIMIT {
                return 0.0;
            }
            if x > SERIES_LIMIT {
                return 1.0;
            }

            let mut term = x;
            let mut sum = x;
            for i in 1..=SERIES_TERMS {
                term = term * x * x / (2 * i + 1) as f64;
                sum += term;
            }

            0.5 + (sum / (2.0 * PI).sqrt()) * (-(x * x) / 2.0).exp()
        }

        /// Upper-tail probability `1 - Φ(x)`
        #[inline]
        pub fn sf(x: f64) -> f64 {
            1.0 - cdf(x)
        }

    }
}

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Running prefix sum
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}
