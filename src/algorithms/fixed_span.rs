//! Fixed-span local-linear smoother.
//!
//! ## Purpose
//!
//! This module smooths scattered (x, y) data with a least-squares linear fit
//! over a symmetric sliding window of fixed width. It is the building block
//! the variable-span supersmoother runs at several spans to decide which
//! window width fits each region of the data best.
//!
//! ## Design notes
//!
//! * **Incremental updates**: The window walks the sorted data with O(1)
//!   mean/variance updates, so one pass is O(n) regardless of span.
//! * **Leave-one-out residuals**: Every smoothed point carries the absolute
//!   cross-validated residual of the local fit, computed from the same window
//!   statistics at no extra cost.
//! * **Sorted core**: [`smooth_sorted`] requires strictly increasing x and is
//!   what the solver calls through its precomputed permutations. [`smooth`]
//!   wraps it with the sort/unsort pattern for unsorted callers.
//!
//! ## Invariants
//!
//! * The window size is odd (2 * half + 1), forced to 2 when the span rounds
//!   below a single neighbor, and never exceeds n.
//! * The window is advanced before point i is smoothed whenever i has passed
//!   the window center and a point remains to admit on the right.
//!
//! ## Edge cases
//!
//! * Zero window variance yields a flat smooth of 0 at that point.
//! * A zero residual denominator yields a residual of 1.0 (small data sets).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::accumulate::WindowAccumulator;
use crate::primitives::errors::AceError;
use crate::primitives::sorting::{first_duplicate, sort_xy, unsort};
use crate::primitives::window::{WindowPolicy, WindowStats};

// Modular dependencies
use super::SmoothingStrategy;

// ============================================================================
// Span Constants
// ============================================================================

/// Narrowest canonical span (5% of the data).
pub const TWEETER_SPAN: f64 = 0.05;

/// Middle canonical span (20% of the data).
pub const MID_SPAN: f64 = 0.2;

/// Widest canonical span (50% of the data).
pub const BASS_SPAN: f64 = 0.5;

/// The canonical span ladder, narrowest first.
pub const DEFAULT_SPANS: [f64; 3] = [TWEETER_SPAN, MID_SPAN, BASS_SPAN];

// ============================================================================
// Output
// ============================================================================

/// Result of one fixed-span smoothing pass.
#[derive(Debug, Clone)]
pub struct SmoothOutput<T> {
    /// Smoothed y-values, one per input point.
    pub smooth: Vec<T>,

    /// Absolute leave-one-out residual of the local fit at each point.
    pub residual: Vec<T>,
}

// ============================================================================
// Window Sizing
// ============================================================================

/// Number of neighbors on each side of the window center for a given span.
#[inline]
pub fn half_width(n: usize, span: f64) -> usize {
    (n as f64 * span) as usize / 2
}

/// Symmetric window size for a given span, forced to at least 2.
#[inline]
pub fn window_size(n: usize, span: f64) -> usize {
    let size = 2 * half_width(n, span) + 1;
    if size <= 1 {
        // Cannot fit a line through 1 point
        return 2;
    }
    size.min(n)
}

// ============================================================================
// Smoothing Passes
// ============================================================================

/// Smooth data that is already sorted by strictly increasing x.
///
/// Walks a symmetric window over the data, fitting a least-squares line to
/// the window contents at each point. Returns the smooth together with the
/// absolute leave-one-out residuals.
///
/// # Errors
///
/// * [`AceError::TooFewPoints`] if fewer than 2 observations are given.
/// * [`AceError::DuplicateXValues`] if adjacent x-values are equal; the
///   incremental window bookkeeping requires a strict ordering.
pub fn smooth_sorted<T>(
    x: &[T],
    y: &[T],
    span: f64,
    policy: WindowPolicy,
) -> Result<SmoothOutput<T>, AceError>
where
    T: Float + WindowAccumulator,
{
    let n = x.len();
    if n < 2 {
        return Err(AceError::TooFewPoints { got: n, min: 2 });
    }
    if let Some(sorted_index) = first_duplicate(x) {
        return Err(AceError::DuplicateXValues { sorted_index });
    }

    let half = half_width(n, span);
    let size = window_size(n, span);

    let mut stats = WindowStats::compute(x, y, 0, size);
    let mut smooth = Vec::with_capacity(n);
    let mut residual = Vec::with_capacity(n);

    for i in 0..n {
        // Slide once i has passed the window center, while a point remains
        // to admit on the right.
        if i > half && stats.upper() < n {
            stats.advance(x, y, policy);
        }

        let smooth_here = smooth_at(&stats, x[i]);
        residual.push(residual_at(&stats, x[i], y[i], smooth_here));
        smooth.push(smooth_here);
    }

    Ok(SmoothOutput { smooth, residual })
}

/// Smooth unsorted data, returning results in the original order.
///
/// Sorts by x, runs [`smooth_sorted`], and scatters both outputs back.
pub fn smooth<T>(
    x: &[T],
    y: &[T],
    span: f64,
    policy: WindowPolicy,
) -> Result<SmoothOutput<T>, AceError>
where
    T: Float + WindowAccumulator,
{
    let sorted = sort_xy(x, y);
    let out = smooth_sorted(&sorted.x, &sorted.y, span, policy)?;
    Ok(SmoothOutput {
        smooth: unsort(&out.smooth, &sorted.indices),
        residual: unsort(&out.residual, &sorted.indices),
    })
}

/// Local least-squares line evaluated at `xi`.
#[inline]
fn smooth_at<T: Float>(stats: &WindowStats<T>, xi: T) -> T {
    if stats.variance != T::zero() {
        let beta = stats.covariance / stats.variance;
        let alpha = stats.mean_y - beta * stats.mean_x;
        beta * xi + alpha
    } else {
        T::zero()
    }
}

/// Absolute leave-one-out residual of the local fit at `xi`.
#[inline]
fn residual_at<T: Float>(stats: &WindowStats<T>, xi: T, yi: T, smooth_here: T) -> T {
    if stats.variance == T::zero() {
        return T::one();
    }
    let one = T::one();
    let dx = xi - stats.mean_x;
    let denom = one - one / T::from(stats.size).unwrap() - dx * dx / stats.variance;
    if denom == T::zero() {
        // Can happen with small data sets
        return one;
    }
    ((yi - smooth_here) / denom).abs()
}

// ============================================================================
// Strategy Adapter
// ============================================================================

/// Fixed-span smoothing strategy for the ACE solver.
///
/// Runs every smoothing pass at the same span instead of selecting one per
/// point. Useful for diagnostics and as a faster, rougher alternative to the
/// default supersmoother.
#[derive(Debug, Clone, Copy)]
pub struct FixedSpanSmoother {
    /// Fraction of the data used as the window.
    pub span: f64,

    /// Window statistics update policy.
    pub policy: WindowPolicy,
}

impl FixedSpanSmoother {
    /// Create a smoother with the given span and incremental updates.
    pub fn new(span: f64) -> Self {
        Self {
            span,
            policy: WindowPolicy::Incremental,
        }
    }
}

impl Default for FixedSpanSmoother {
    fn default() -> Self {
        Self::new(MID_SPAN)
    }
}

impl<T: Float + WindowAccumulator> SmoothingStrategy<T> for FixedSpanSmoother {
    fn smooth_sorted(&self, x: &[T], y: &[T]) -> Result<Vec<T>, AceError> {
        smooth_sorted(x, y, self.span, self.policy).map(|out| out.smooth)
    }
}
