//! High-level API for ACE regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for ACE. It
//! implements a fluent builder pattern for configuring the regression and a
//! validated handle for running fits.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   input data is validated at fit time.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`AceBuilder`] via `Ace::new()`.
//! 2. Chain configuration methods (`.bass_enhancement()`, etc.).
//! 3. Call `.build()` to get a validated [`Ace`] handle.
//! 4. Call `.fit(&x, &y)` for transforms, or `.fit_model(&x, &y)` for a
//!    continuous model as well.
//!
//! ## Example
//!
//! ```
//! use ace_rs::prelude::*;
//!
//! let x = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]];
//! let y = vec![1.1, 1.9, 3.2, 3.9, 5.1, 5.9];
//!
//! let ace = Ace::new().build().unwrap();
//! let result = ace.fit(&x, &y).unwrap();
//! assert_eq!(result.y_transform.len(), y.len());
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::SmoothingStrategy;
use crate::algorithms::supersmoother::SuperSmoother;
use crate::engine::solver::{AceSolver, MAX_OUTER_ITERATIONS};
use crate::engine::validator::Validator;
use crate::evaluation::model::Model;
use crate::math::accumulate::WindowAccumulator;

// Publicly re-exported types
pub use crate::algorithms::fixed_span::FixedSpanSmoother;
pub use crate::engine::output::AceResult;
pub use crate::primitives::errors::AceError;
pub use crate::primitives::window::WindowPolicy;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an ACE regression.
#[derive(Debug, Clone, Default)]
pub struct AceBuilder {
    /// Bass enhancement alpha in [0, 10].
    pub bass_enhancement: Option<f64>,

    /// Window statistics update policy.
    pub window_policy: Option<WindowPolicy>,

    /// Outer iteration cap.
    pub max_outer_iterations: Option<usize>,

    /// Tracks the first parameter set multiple times, if any.
    pub duplicate_param: Option<&'static str>,
}

impl AceBuilder {
    /// Create a builder with all parameters unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supersmoother bass enhancement (default 0, disabled).
    pub fn bass_enhancement(mut self, alpha: f64) -> Self {
        if self.bass_enhancement.is_some() {
            self.duplicate_param = Some("bass_enhancement");
        }
        self.bass_enhancement = Some(alpha);
        self
    }

    /// Set the window update policy (default incremental).
    pub fn window_policy(mut self, policy: WindowPolicy) -> Self {
        if self.window_policy.is_some() {
            self.duplicate_param = Some("window_policy");
        }
        self.window_policy = Some(policy);
        self
    }

    /// Set the outer iteration cap (default 200).
    pub fn max_outer_iterations(mut self, cap: usize) -> Self {
        if self.max_outer_iterations.is_some() {
            self.duplicate_param = Some("max_outer_iterations");
        }
        self.max_outer_iterations = Some(cap);
        self
    }

    /// Validate the configuration and produce a fit handle.
    pub fn build(self) -> Result<Ace, AceError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bass_enhancement = self.bass_enhancement.unwrap_or(0.0);
        Validator::validate_bass_enhancement(bass_enhancement)?;

        let max_outer = self.max_outer_iterations.unwrap_or(MAX_OUTER_ITERATIONS);
        Validator::validate_iteration_cap(max_outer)?;

        Ok(Ace {
            bass_enhancement,
            window_policy: self.window_policy.unwrap_or_default(),
            max_outer,
        })
    }
}

// ============================================================================
// Fit Handle
// ============================================================================

/// A validated ACE configuration, ready to fit data.
#[derive(Debug, Clone)]
pub struct Ace {
    /// Supersmoother bass enhancement.
    pub bass_enhancement: f64,

    /// Window statistics update policy.
    pub window_policy: WindowPolicy,

    /// Outer iteration cap.
    pub max_outer: usize,
}

impl Ace {
    /// Start configuring a regression.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AceBuilder {
        AceBuilder::new()
    }

    /// Fit transforms with the default supersmoother strategy.
    pub fn fit<T>(&self, x: &[Vec<T>], y: &[T]) -> Result<AceResult<T>, AceError>
    where
        T: Float + WindowAccumulator,
    {
        let strategy = SuperSmoother {
            bass_enhancement: self.bass_enhancement,
            policy: self.window_policy,
        };
        self.fit_with(&strategy, x, y)
    }

    /// Fit transforms with a custom smoothing strategy.
    pub fn fit_with<T, S>(
        &self,
        strategy: &S,
        x: &[Vec<T>],
        y: &[T],
    ) -> Result<AceResult<T>, AceError>
    where
        T: Float + WindowAccumulator,
        S: SmoothingStrategy<T> + Clone,
    {
        Validator::validate_inputs(x, y)?;

        let mut solver = AceSolver::new(strategy.clone());
        solver.max_outer = self.max_outer;
        solver.solve(x, y)
    }

    /// Fit transforms and wrap them in a continuous model.
    pub fn fit_model<T>(&self, x: &[Vec<T>], y: &[T]) -> Result<(AceResult<T>, Model<T>), AceError>
    where
        T: Float + WindowAccumulator,
    {
        let result = self.fit(x, y)?;
        let model = Model::new(x, y, &result.x_transforms, &result.y_transform);
        Ok((result, model))
    }
}
