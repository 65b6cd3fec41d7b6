//! Sorting and permutation utilities for ACE input columns.
//!
//! ## Purpose
//!
//! This module provides the sort/unsort machinery shared by the smoothers and
//! the ACE solver: stable sort permutations computed once per column, applied
//! to present data to the smoother in sorted order, and inverted to scatter
//! results back to the original observation order.
//!
//! ## Design notes
//!
//! * **Stability**: Ties are broken by original index, so permutations are
//!   deterministic for any input.
//! * **Efficiency**: Applying or inverting a permutation is O(n).
//! * **One-time cost**: The solver computes each column's permutation exactly
//!   once at initialization and reuses it for every iteration.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: A column is sorted ascending, recording the permutation.
//! 2. **Process**: Smoothing operates on the sorted sequence.
//! 3. **Unsort**: Results are mapped back to original indices in O(n) time.
//!
//! ## Invariants
//!
//! * `sort_order` returns a valid permutation of `0..n`.
//! * `unsort(sort(v, p), p) == v` element-wise for any `v` of matching length.
//!
//! ## Non-goals
//!
//! * This module does not detect duplicate values (the smoother does).
//! * This module does not perform any smoothing or validation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Scatter data sorted by x-coordinates.
pub struct SortedScatter<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,

    /// Permutation where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

// ============================================================================
// Permutation Functions
// ============================================================================

/// Compute the stable ascending sort permutation of a column.
///
/// The result maps sorted positions to original positions:
/// `values[order[0]] <= values[order[1]] <= ...`. Equal values keep their
/// original relative order.
#[inline]
pub fn sort_order<T: Float>(values: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    // Stable sort so ties are broken by original index
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Gather a column into sorted order through a permutation.
#[inline]
pub fn apply_permutation<T: Copy>(values: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| values[i]).collect()
}

/// Scatter sorted results back to the original order in O(n) time.
///
/// This is the exact inverse of [`apply_permutation`] for the same `order`.
#[inline]
pub fn unsort<T: Float>(sorted_values: &[T], order: &[usize]) -> Vec<T> {
    let n = order.len();
    let mut result = vec![T::zero(); n];

    // Map each sorted position back to its original position
    for (sorted_idx, &orig_idx) in order.iter().enumerate() {
        result[orig_idx] = sorted_values[sorted_idx];
    }

    result
}

// ============================================================================
// Scatter Sorting
// ============================================================================

/// Sort scatter data by x-coordinates in ascending order.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Computes the stable sort permutation of `x`.
/// 3. Gathers both columns through it.
#[inline]
pub fn sort_xy<T: Float>(x: &[T], y: &[T]) -> SortedScatter<T> {
    let n = x.len();

    // Fast path: data already sorted by x
    let is_sorted = x.windows(2).all(|w| w[0] <= w[1]);
    if is_sorted {
        return SortedScatter {
            x: x.to_vec(),
            y: y.to_vec(),
            indices: (0..n).collect(),
        };
    }

    let indices = sort_order(x);
    SortedScatter {
        x: apply_permutation(x, &indices),
        y: apply_permutation(y, &indices),
        indices,
    }
}

/// Find the first adjacent tie in a sorted column, if any.
///
/// Returns the sorted position `i` such that `x[i] == x[i + 1]`.
#[inline]
pub fn first_duplicate<T: Float>(x_sorted: &[T]) -> Option<usize> {
    x_sorted.windows(2).position(|w| w[0] == w[1])
}
