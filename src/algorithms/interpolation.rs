//! Piecewise-linear interpolation.
//!
//! ## Purpose
//!
//! This module provides clamped linear interpolation over an ascending node
//! table. The supersmoother uses it to blend primary smooths across the span
//! ladder, and the evaluation layer uses it to turn discrete transform
//! scatter into continuous functions.
//!
//! ## Edge cases
//!
//! * Queries below the first node or above the last node are clamped to the
//!   boundary values (no extrapolation).
//! * A single-node table returns that node's value for every query.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Interpolation Functions
// ============================================================================

/// Linearly interpolate `query` over ascending nodes `(xs, ys)`.
///
/// Out-of-range queries return the first or last y-value.
#[inline]
pub fn interp_clamped<T: Float>(query: T, xs: &[T], ys: &[T]) -> T {
    let n = xs.len();
    if query <= xs[0] {
        return ys[0];
    }
    if query >= xs[n - 1] {
        return ys[n - 1];
    }

    // Find the segment containing the query
    let mut upper = 1;
    while xs[upper] < query {
        upper += 1;
    }
    let lower = upper - 1;

    let width = xs[upper] - xs[lower];
    if width == T::zero() {
        return ys[lower];
    }
    let t = (query - xs[lower]) / width;
    ys[lower] + t * (ys[upper] - ys[lower])
}

// ============================================================================
// Interpolant Table
// ============================================================================

/// A reusable piecewise-linear interpolant with explicit fill values.
///
/// Nodes are sorted by x at construction. Queries outside the node range
/// return `below` or `above` instead of extrapolating.
#[derive(Debug, Clone)]
pub struct Interp1d<T> {
    /// Ascending node x-coordinates.
    x: Vec<T>,

    /// Node values matching `x`.
    y: Vec<T>,

    /// Value returned for queries below the first node.
    below: T,

    /// Value returned for queries above the last node.
    above: T,
}

impl<T: Float> Interp1d<T> {
    /// Build an interpolant from unsorted nodes with the given fill values.
    pub fn new(x: &[T], y: &[T], below: T, above: T) -> Self {
        let sorted = crate::primitives::sorting::sort_xy(x, y);
        Self {
            x: sorted.x,
            y: sorted.y,
            below,
            above,
        }
    }

    /// Evaluate the interpolant at `query`.
    #[inline]
    pub fn eval(&self, query: T) -> T {
        if query < self.x[0] {
            return self.below;
        }
        if query > self.x[self.x.len() - 1] {
            return self.above;
        }
        interp_clamped(query, &self.x, &self.y)
    }

    /// The node range covered by the interpolant.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
