//! Basic statistics helpers.
//!
//! Small pure functions shared by the solver and the smoothers. All moments
//! use the population convention (divide by N), matching the normalization
//! applied to the response transform.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Arithmetic mean of a slice. Returns zero for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap()
}

/// Population standard deviation (divide by N) of a slice.
#[inline]
pub fn population_std<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let m = mean(values);
    let ss = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - m) * (v - m));
    (ss / T::from(values.len()).unwrap()).sqrt()
}

/// Subtract the mean from every element, returning the removed mean.
#[inline]
pub fn center_in_place<T: Float>(values: &mut [T]) -> T {
    let m = mean(values);
    for v in values.iter_mut() {
        *v = *v - m;
    }
    m
}

/// Mean squared difference between two equal-length slices.
#[inline]
pub fn mean_squared_error<T: Float>(a: &[T], b: &[T]) -> T {
    if a.is_empty() {
        return T::zero();
    }
    let ss = a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + (ai - bi) * (ai - bi));
    ss / T::from(a.len()).unwrap()
}

/// Element-wise sum of a set of equal-length columns.
#[inline]
pub fn column_sum<T: Float>(columns: &[Vec<T>], n: usize) -> Vec<T> {
    let mut total = vec![T::zero(); n];
    for column in columns {
        for (t, &v) in total.iter_mut().zip(column.iter()) {
            *t = *t + v;
        }
    }
    total
}
