//! Window accumulation kernels.
//!
//! ## Purpose
//!
//! This module provides optimized scalar and SIMD accumulation functions for
//! building window statistics (sums and centered moments) over contiguous
//! slices of sorted scatter data, plus the `WindowAccumulator` trait that
//! dispatches each float type to its preferred kernel.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Accumulation Trait
// ============================================================================

/// Per-type dispatch of window accumulation kernels.
///
/// `f64` routes to the SIMD kernels, `f32` to the scalar ones.
pub trait WindowAccumulator: Sized {
    /// Sums of x and y over a window.
    fn window_sums(x: &[Self], y: &[Self]) -> (Self, Self);

    /// Centered cross-moment and second moment of x over a window.
    ///
    /// Returns `(sum((x - mean_x) * (y - mean_y)), sum((x - mean_x)^2))`.
    fn centered_moments(x: &[Self], y: &[Self], mean_x: Self, mean_y: Self) -> (Self, Self);
}

// ============================================================================
// Scalar Kernels
// ============================================================================

/// Window sums (Scalar).
#[inline]
pub fn window_sums_scalar<T: Float>(x: &[T], y: &[T]) -> (T, T) {
    let mut s_x = T::zero();
    let mut s_y = T::zero();

    for i in 0..x.len() {
        s_x = s_x + x[i];
        s_y = s_y + y[i];
    }

    (s_x, s_y)
}

/// Centered moments (Scalar).
#[inline]
pub fn centered_moments_scalar<T: Float>(x: &[T], y: &[T], mean_x: T, mean_y: T) -> (T, T) {
    let mut s_cov = T::zero();
    let mut s_var = T::zero();

    for i in 0..x.len() {
        let dx = x[i] - mean_x;
        s_cov = s_cov + dx * (y[i] - mean_y);
        s_var = s_var + dx * dx;
    }

    (s_cov, s_var)
}

// ============================================================================
// SIMD Kernels
// ============================================================================

/// Window sums using SIMD.
pub fn window_sums_simd(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len();
    let mut i = 0;

    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);

    while i + 2 <= n {
        s_x += f64x2::new([x[i], x[i + 1]]);
        s_y += f64x2::new([y[i], y[i + 1]]);
        i += 2;
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();

    // Tail
    for k in i..n {
        a_x += x[k];
        a_y += y[k];
    }

    (a_x, a_y)
}

/// Centered moments using SIMD.
pub fn centered_moments_simd(x: &[f64], y: &[f64], mean_x: f64, mean_y: f64) -> (f64, f64) {
    let n = x.len();
    let mut i = 0;

    let mut s_cov = f64x2::splat(0.0);
    let mut s_var = f64x2::splat(0.0);

    let mx = f64x2::splat(mean_x);
    let my = f64x2::splat(mean_y);

    while i + 2 <= n {
        let dx = f64x2::new([x[i], x[i + 1]]) - mx;
        let dy = f64x2::new([y[i], y[i + 1]]) - my;

        s_cov += dx * dy;
        s_var += dx * dx;

        i += 2;
    }

    let mut a_cov = s_cov.reduce_add();
    let mut a_var = s_var.reduce_add();

    // Tail
    for k in i..n {
        let dx = x[k] - mean_x;
        a_cov += dx * (y[k] - mean_y);
        a_var += dx * dx;
    }

    (a_cov, a_var)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl WindowAccumulator for f64 {
    #[inline]
    fn window_sums(x: &[f64], y: &[f64]) -> (f64, f64) {
        window_sums_simd(x, y)
    }

    #[inline]
    fn centered_moments(x: &[f64], y: &[f64], mean_x: f64, mean_y: f64) -> (f64, f64) {
        centered_moments_simd(x, y, mean_x, mean_y)
    }
}

impl WindowAccumulator for f32 {
    #[inline]
    fn window_sums(x: &[f32], y: &[f32]) -> (f32, f32) {
        window_sums_scalar(x, y)
    }

    #[inline]
    fn centered_moments(x: &[f32], y: &[f32], mean_x: f32, mean_y: f32) -> (f32, f32) {
        centered_moments_scalar(x, y, mean_x, mean_y)
    }
}
