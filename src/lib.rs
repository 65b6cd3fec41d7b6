//! # ACE — Alternating Conditional Expectations for Rust
//!
//! A high-performance implementation of the ACE algorithm for multivariate
//! nonparametric regression, with Friedman's variable-span supersmoother as
//! the conditional-expectation estimator.
//!
//! ## What is ACE?
//!
//! ACE (Alternating Conditional Expectations, Breiman & Friedman 1985) finds
//! optimal transformations for multiple regression. Given a response `y` and
//! predictors `x_1..x_k`, it fits transforms `theta` and `phi_1..phi_k` such
//! that
//!
//! ```text
//! theta(y) ≈ phi_1(x_1) + phi_2(x_2) + ... + phi_k(x_k)
//! ```
//!
//! without assuming any functional form for the transforms. The transforms
//! are estimated purely from the data by alternately smoothing each side of
//! the equation against the other until the unexplained error stops
//! decreasing.
//!
//! **Key advantages:**
//! - No parametric assumptions about the underlying relationships
//! - Reveals the shape and relative magnitude of each predictor's effect
//! - Produces a lightweight surrogate model of a more complex response
//! - Handles strongly nonlinear and non-monotonic relationships
//!
//! **How ACE works:**
//!
//! 1. Standardize `theta(y)` and start every `phi_k` at zero
//! 2. Inner loop: refit each `phi_k` as the smooth of
//!    `theta - sum(phi_i, i != k)` against `x_k`, while the error decreases
//! 3. Outer loop: refit `theta` as the standardized smooth of `sum(phi)`
//!    against `y`, while the error decreases
//! 4. Return the fitted transforms as discrete points, optionally wrapped in
//!    continuous interpolants for evaluation at arbitrary inputs
//!
//! Every conditional expectation is estimated by the supersmoother: a
//! variable-span local-linear smoother that picks the best window width for
//! each region of the data using cross-validated residuals.
//!
//! ## Quick Start
//!
//! ```rust
//! use ace_rs::prelude::*;
//!
//! // y depends nonlinearly on x
//! let x: Vec<f64> = (0..40).map(|i| i as f64 / 4.0).collect();
//! let y: Vec<f64> = x.iter().map(|&v| v * v + 1.0).collect();
//!
//! let ace = Ace::new().build()?;
//! let result = ace.fit(&[x], &y)?;
//!
//! println!("{}", result);
//! # Result::<(), AceError>::Ok(())
//! ```
//!
//! ### Continuous evaluation
//!
//! ```rust
//! use ace_rs::prelude::*;
//!
//! let x: Vec<f64> = (0..50).map(|i| i as f64 / 5.0).collect();
//! let y: Vec<f64> = x.iter().map(|&v| v * v).collect();
//!
//! let ace = Ace::new().build()?;
//! let (_result, model) = ace.fit_model(&[x], &y)?;
//!
//! // Evaluate the regression at a new point
//! let prediction = model.eval(&[3.5])?;
//! assert!(prediction.is_finite());
//! # Result::<(), AceError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns a `Result<AceResult<T>, AceError>`:
//!
//! - **`Ok(AceResult<T>)`**: Fitted transforms, iteration counts, and the
//!   final unexplained error.
//! - **`Err(AceError)`**: Indicates a failure (e.g., mismatched column
//!   lengths, duplicate values within a column, invalid parameters).
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults. You only need to specify
//! what you want to change.
//!
//! | Parameter                | Default       | Range        | Description                                    |
//! |--------------------------|---------------|--------------|------------------------------------------------|
//! | **bass_enhancement**     | 0 (disabled)  | [0, 10]      | Pulls span selection toward wider windows      |
//! | **window_policy**        | `Incremental` | 2 policies   | O(1) window updates vs. full recomputation     |
//! | **max_outer_iterations** | 200           | [1, ∞)       | Hard cap on the outer loop                     |
//!
//! The `Recompute` window policy recalculates window statistics from scratch
//! on every slide. It exists to validate the incremental updates and is not
//! meant for production use.
//!
//! ## Minimal Usage (no_std)
//!
//! The core fit runs in `no_std` environments (`alloc` required). Disable
//! default features to remove the standard library dependency; the text
//! persistence module is `std`-only and disappears with it:
//!
//! ```toml
//! [dependencies]
//! ace-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Breiman, L. & Friedman, J. H. (1985). "Estimating Optimal
//!   Transformations for Multiple Regression and Correlation". JASA 80(391).
//! - Friedman, J. H. (1984). "A Variable Span Smoother". LCS Technical
//!   Report 5, Stanford.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, sorting/permutation utilities, and the
// sliding-window statistics accumulator.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains scalar and SIMD window accumulation kernels and basic moments.
mod math;

// Layer 3: Algorithms - the smoothers.
//
// Contains the fixed-span local-linear smoother, the variable-span
// supersmoother, and clamped linear interpolation.
mod algorithms;

// Layer 4: Evaluation - continuous models over finished fits.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the alternating conditional expectation loops, and
// result assembly.
mod engine;

// Whitespace-delimited text persistence (std only).
#[cfg(feature = "std")]
mod io;

// High-level fluent API for ACE regression.
//
// Provides the `Ace` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard ACE prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use ace_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Ace, AceBuilder, AceError, AceResult, FixedSpanSmoother,
        WindowPolicy,
        WindowPolicy::{Incremental, Recompute},
    };
    pub use crate::algorithms::SmoothingStrategy;
    pub use crate::algorithms::supersmoother::SuperSmoother;
    pub use crate::evaluation::model::Model;

    #[cfg(feature = "std")]
    pub use crate::io::{read_column_data, write_input, write_transforms};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation layer.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
