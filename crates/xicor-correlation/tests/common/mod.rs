//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use approx::assert_abs_diff_eq;

pub const EPSILON: f64 = 1e-7;

pub const X1: [f64; 11] = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
pub const Y1: [f64; 11] = [8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68];

pub const X2: [f64; 11] = X1;
pub const Y2: [f64; 11] = [9.14, 8.14, 8.74, 8.77, 9.26, 8.1, 6.13, 3.1, 9.13, 7.26, 4.74];

/// Heavy ties in x, none in y
pub const X3: [f64; 8] = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0];
pub const Y3: [f64; 8] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

/// Every x but one tied
pub const X4: [f64; 11] = [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0];
pub const Y4: [f64; 11] = [6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.5, 5.56, 7.91, 6.89];

/// Xi of (X3, Y3) over all valid tie resolutions: 1 - k / 21 for k in 7..=15
pub fn x3_resolutions() -> Vec<f64> {
    (7..=15).map(|k| 1.0 - f64::from(k) / 21.0).collect()
}

/// x = 1..=10, y = x + 4
pub fn linear() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let y = x.iter().map(|v| v + 4.0).collect();
    (x, y)
}
