//! Core building blocks for Chatterjee's xi correlation
//!
//! This crate provides the pieces the correlation engine is assembled from:
//!
//! - **Preprocessing**: paired NaN removal ([`preprocess`])
//! - **Ranking**: tie-aware argsort, random and maximal tie-break ranks ([`ranking`])
//! - **Math**: the series-based normal CDF and small reductions ([`math`])
//! - **Execution**: sequential/parallel batch engines and cancellation ([`execution`])
//! - **Errors**: the error type shared by every xicor crate ([`error`])
//!
//! Every randomized operation takes its random source as an argument, so a
//! seeded generator reproduces all tie resolutions.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use xicor_core::{argsort_ties, rank_max, rank_random, remove_nan_pairs};
//!
//! let (x, y) = remove_nan_pairs(&[1.0, f64::NAN, 2.0, 2.0], &[4.0, 5.0, 6.0, 7.0]).unwrap();
//! assert_eq!(x, vec![1.0, 2.0, 2.0]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let ranks = rank_random(&x, &mut rng);
//! assert_eq!(ranks[0], 1.0);
//! assert_eq!(rank_max(&x), vec![1.0, 3.0, 3.0]);
//! assert_eq!(argsort_ties(&y, &mut rng), vec![0, 1, 2]);
//! ```

pub mod error;
pub mod execution;
pub mod math;
pub mod preprocess;
pub mod ranking;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    sequential, CancellationToken, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use math::distributions::normal;
pub use preprocess::{has_nan_pairs, remove_nan_pairs};
pub use ranking::{argsort, argsort_ties, rank_max, rank_random, tie_blocks};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::execution::{sequential, CancellationToken, ExecutionEngine, SequentialEngine};
    #[cfg(feature = "parallel")]
    pub use crate::execution::{parallel, ParallelEngine};
    pub use crate::ranking::{argsort_ties, rank_max, rank_random};
}
