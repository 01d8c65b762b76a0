//! Paired missing-value removal

use crate::{Error, Result};

/// Drop every index where either `x[i]` or `y[i]` is NaN
///
/// Indices are removed from both sequences together, so the surviving pairs
/// stay aligned and keep their relative order. Infinite values are kept.
///
/// # Errors
/// [`Error::SizeMismatch`] if the inputs have different lengths.
///
/// ```rust
/// use xicor_core::preprocess::remove_nan_pairs;
///
/// let x = [0.0, 1.0, f64::NAN, 3.0];
/// let y = [8.0, f64::NAN, 6.0, 5.0];
/// let (x, y) = remove_nan_pairs(&x, &y).unwrap();
/// assert_eq!(x, vec![0.0, 3.0]);
/// assert_eq!(y, vec![8.0, 5.0]);
/// ```
pub fn remove_nan_pairs(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len()));
    }

    Ok(x.iter()
        .zip(y)
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .unzip())
}

/// Whether any index would be dropped by [`remove_nan_pairs`]
pub fn has_nan_pairs(x: &[f64], y: &[f64]) -> bool {
    x.iter().chain(y).any(|v| v.is_nan())
}
