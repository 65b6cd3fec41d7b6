//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the smoothing algorithms and their supporting
//! numerical routines:
//! - Fixed-span local-linear smoothing with leave-one-out residuals
//! - The variable-span supersmoother built on top of it
//! - Clamped piecewise-linear interpolation
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AceError;

/// Fixed-span local-linear smoothing.
pub mod fixed_span;

/// Clamped piecewise-linear interpolation.
pub mod interpolation;

/// Variable-span supersmoothing.
pub mod supersmoother;

// ============================================================================
// Strategy Trait
// ============================================================================

/// A conditional-expectation estimator usable by the ACE solver.
///
/// The solver hands each smoother strictly increasing x-values; the strategy
/// returns one smoothed value per input point, in the same order.
pub trait SmoothingStrategy<T: Float> {
    /// Smooth sorted data, returning the estimate of E[y | x].
    fn smooth_sorted(&self, x: &[T], y: &[T]) -> Result<Vec<T>, AceError>;
}
