//! Variable-span supersmoother.
//!
//! ## Purpose
//!
//! This module implements Friedman's adaptive smoother. It runs the
//! fixed-span smoother at a ladder of three spans, uses cross-validated
//! residuals to pick the best span for each region of the data, and blends
//! the fixed-span results into a single smooth whose effective window width
//! varies across the domain.
//!
//! ## Key concepts
//!
//! 1. **Primary smooths**: One fixed-span pass per canonical span (tweeter,
//!    mid, bass), each carrying leave-one-out residuals.
//! 2. **Residual smoothing**: The absolute residual curves are themselves
//!    smoothed at the mid span before comparison, for stability.
//! 3. **Span selection**: Each point takes the span with the smallest
//!    smoothed residual; ties go to the narrowest span.
//! 4. **Bass enhancement**: An alpha in (0, 10] pulls the selected spans
//!    toward the bass span for a smoother look. Alpha of 0 changes nothing.
//! 5. **Blending**: The span choices are smoothed at the mid span, then the
//!    primary values are interpolated over the span ladder at each point,
//!    with a final tweeter-span pass over the blended curve.
//!
//! ## Invariants
//!
//! * The final tweeter-span pass always runs; it is required to reproduce
//!   the classic supsmu results even though the publication omits it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::accumulate::WindowAccumulator;
use crate::primitives::errors::AceError;
use crate::primitives::sorting::{sort_xy, unsort};
use crate::primitives::window::WindowPolicy;

// Modular dependencies
use super::SmoothingStrategy;
use super::fixed_span;
use super::fixed_span::{BASS_SPAN, DEFAULT_SPANS, MID_SPAN, TWEETER_SPAN};
use super::interpolation::interp_clamped;

/// Position of the bass span in the span ladder.
const BASS_INDEX: usize = 2;

// ============================================================================
// Smoothing Passes
// ============================================================================

/// Supersmooth data that is already sorted by strictly increasing x.
///
/// `bass_enhancement` must be in [0, 10]; 0 disables the enhancement.
///
/// # Errors
///
/// Propagates [`AceError::TooFewPoints`] and [`AceError::DuplicateXValues`]
/// from the underlying fixed-span passes.
pub fn smooth_sorted<T>(
    x: &[T],
    y: &[T],
    bass_enhancement: f64,
    policy: WindowPolicy,
) -> Result<Vec<T>, AceError>
where
    T: Float + WindowAccumulator,
{
    let n = x.len();

    // Primary smooths at every canonical span, plus their residual curves
    // smoothed at the mid span for stability.
    let mut primaries: Vec<Vec<T>> = Vec::with_capacity(DEFAULT_SPANS.len());
    let mut residual_smooths: Vec<Vec<T>> = Vec::with_capacity(DEFAULT_SPANS.len());
    for &span in &DEFAULT_SPANS {
        let out = fixed_span::smooth_sorted(x, y, span, policy)?;
        let residual_smooth = fixed_span::smooth_sorted(x, &out.residual, MID_SPAN, policy)?;
        primaries.push(out.smooth);
        residual_smooths.push(residual_smooth.smooth);
    }

    // Best span per point: smallest smoothed residual, narrowest span on ties.
    let best_index: Vec<usize> = (0..n)
        .map(|i| {
            let mut best = 0;
            for j in 1..DEFAULT_SPANS.len() {
                if residual_smooths[j][i] < residual_smooths[best][i] {
                    best = j;
                }
            }
            best
        })
        .collect();

    let best_spans = enhance_bass(&best_index, &residual_smooths, bass_enhancement);

    // Smooth the span choices themselves at the mid span.
    let smoothed_spans = fixed_span::smooth_sorted(x, &best_spans, MID_SPAN, policy)?.smooth;

    // Blend the primary smooths by interpolating over the span ladder.
    let ladder: Vec<T> = DEFAULT_SPANS
        .iter()
        .map(|&s| T::from(s).unwrap())
        .collect();
    let mut node_values = [T::zero(); 3];
    let blended: Vec<T> = (0..n)
        .map(|i| {
            for (node, primary) in node_values.iter_mut().zip(primaries.iter()) {
                *node = primary[i];
            }
            interp_clamped(smoothed_spans[i], &ladder, &node_values)
        })
        .collect();

    // Final tweeter-span pass over the blended curve.
    let result = fixed_span::smooth_sorted(x, &blended, TWEETER_SPAN, policy)?;
    Ok(result.smooth)
}

/// Supersmooth unsorted data, returning results in the original order.
pub fn smooth<T>(
    x: &[T],
    y: &[T],
    bass_enhancement: f64,
    policy: WindowPolicy,
) -> Result<Vec<T>, AceError>
where
    T: Float + WindowAccumulator,
{
    let sorted = sort_xy(x, y);
    let smooth = smooth_sorted(&sorted.x, &sorted.y, bass_enhancement, policy)?;
    Ok(unsort(&smooth, &sorted.indices))
}

/// Pull span choices toward the bass span (Eq. 11).
///
/// An alpha of 0 returns the selected spans untouched, matching supsmu.
pub fn enhance_bass<T: Float>(
    best_index: &[usize],
    residual_smooths: &[Vec<T>],
    bass_enhancement: f64,
) -> Vec<T> {
    let spans: Vec<T> = DEFAULT_SPANS
        .iter()
        .map(|&s| T::from(s).unwrap())
        .collect();

    if bass_enhancement == 0.0 {
        return best_index.iter().map(|&j| spans[j]).collect();
    }

    let bass_span = T::from(BASS_SPAN).unwrap();
    let exponent = T::from(10.0 - bass_enhancement).unwrap();

    best_index
        .iter()
        .enumerate()
        .map(|(i, &j)| {
            let best_span = spans[j];
            let best_residual = residual_smooths[j][i];
            let bass_residual = residual_smooths[BASS_INDEX][i];
            if best_residual > T::zero() && best_residual < bass_residual {
                let ratio = best_residual / bass_residual;
                let bass_factor = ratio.powf(exponent);
                best_span + (bass_span - best_span) * bass_factor
            } else {
                best_span
            }
        })
        .collect()
}

// ============================================================================
// Strategy Adapter
// ============================================================================

/// Variable-span smoothing strategy, the default for the ACE solver.
#[derive(Debug, Clone, Copy)]
pub struct SuperSmoother {
    /// Bass enhancement alpha in [0, 10]; 0 disables it.
    pub bass_enhancement: f64,

    /// Window statistics update policy for the underlying passes.
    pub policy: WindowPolicy,
}

impl SuperSmoother {
    /// Create a supersmoother with the given bass enhancement.
    pub fn new(bass_enhancement: f64) -> Self {
        Self {
            bass_enhancement,
            policy: WindowPolicy::Incremental,
        }
    }
}

impl Default for SuperSmoother {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<T: Float + WindowAccumulator> SmoothingStrategy<T> for SuperSmoother {
    fn smooth_sorted(&self, x: &[T], y: &[T]) -> Result<Vec<T>, AceError> {
        smooth_sorted(x, y, self.bass_enhancement, self.policy)
    }
}
