#![cfg(feature = "dev")]
//! Tests for the sliding-window statistics accumulator.
//!
//! These tests mirror the classic checks on the fixed-span smoother's fast
//! updates: every incremental add/remove/advance must agree with a full
//! recomputation over the same window contents.
//!
//! ## Test Organization
//!
//! 1. **From-Scratch Computation** - means and moments over a window
//! 2. **Incremental Updates** - add and remove single observations
//! 3. **Window Advancement** - incremental vs. recompute policies

use approx::assert_relative_eq;

use ace_rs::internals::primitives::window::{WindowPolicy, WindowStats};

const X: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
const Y: [f64; 4] = [4.0, 5.0, 6.0, 7.0];

// ============================================================================
// From-Scratch Computation Tests
// ============================================================================

/// Test means over the initial window of three points.
#[test]
fn test_compute_means() {
    let stats = WindowStats::compute(&X, &Y, 0, 3);
    assert_relative_eq!(stats.mean_x, 2.0);
    assert_relative_eq!(stats.mean_y, 5.0);
}

/// Test centered moments over the initial window.
#[test]
fn test_compute_moments() {
    let stats = WindowStats::compute(&X, &Y, 0, 3);
    // x and y both step by 1, so covariance equals variance
    assert_relative_eq!(stats.covariance, 2.0);
    assert_relative_eq!(stats.variance, 2.0);
}

// ============================================================================
// Incremental Update Tests
// ============================================================================

/// Test the mean update when an observation is added.
#[test]
fn test_means_on_addition() {
    let mut stats = WindowStats::compute(&X, &Y, 0, 3);
    stats.add(7.0, 8.0);
    assert_relative_eq!(stats.mean_x, (1.0 + 2.0 + 3.0 + 7.0) / 4.0);
    assert_relative_eq!(stats.mean_y, (4.0 + 5.0 + 6.0 + 8.0) / 4.0);
    assert_eq!(stats.size, 4);
}

/// Test the mean update when an observation is removed.
#[test]
fn test_means_on_removal() {
    let mut stats = WindowStats::compute(&X, &Y, 0, 3);
    stats.remove(3.0, 6.0);
    assert_relative_eq!(stats.mean_x, (1.0 + 2.0) / 2.0);
    assert_relative_eq!(stats.mean_y, (4.0 + 5.0) / 2.0);
    assert_eq!(stats.size, 2);
}

/// Test that fast moment updates on addition agree with recomputation.
#[test]
fn test_moments_on_addition_match_recompute() {
    let mut stats = WindowStats::compute(&X, &Y, 0, 3);
    stats.add(4.0, 7.0);

    let full = WindowStats::compute(&X, &Y, 0, 4);
    assert_relative_eq!(stats.covariance, full.covariance, epsilon = 1e-12);
    assert_relative_eq!(stats.variance, full.variance, epsilon = 1e-12);
}

/// Test that fast moment updates on removal agree with recomputation.
#[test]
fn test_moments_on_removal_match_recompute() {
    let mut stats = WindowStats::compute(&X, &Y, 0, 3);
    stats.remove(3.0, 6.0);

    let full = WindowStats::compute(&X, &Y, 0, 2);
    assert_relative_eq!(stats.covariance, full.covariance, epsilon = 1e-12);
    assert_relative_eq!(stats.variance, full.variance, epsilon = 1e-12);
}

// ============================================================================
// Window Advancement Tests
// ============================================================================

/// Test that advancing drops the leftmost point and admits the next right.
#[test]
fn test_advance_window_bounds() {
    let mut stats = WindowStats::compute(&X, &Y, 0, 3);
    stats.advance(&X, &Y, WindowPolicy::Incremental);
    assert_eq!(stats.lower, 1);
    assert_eq!(stats.size, 3);
    assert_eq!(stats.upper(), 4);
}

/// Test that the incremental and recompute policies agree after advancing.
#[test]
fn test_advance_policies_agree() {
    let x: Vec<f64> = (0..50).map(|i| (i as f64).sqrt()).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() * 3.0 + 0.5).collect();

    let mut fast = WindowStats::compute(&x, &y, 0, 11);
    let mut slow = fast.clone();

    for _ in 0..30 {
        fast.advance(&x, &y, WindowPolicy::Incremental);
        slow.advance(&x, &y, WindowPolicy::Recompute);

        assert_eq!(fast.lower, slow.lower);
        assert_relative_eq!(fast.mean_x, slow.mean_x, epsilon = 1e-9);
        assert_relative_eq!(fast.mean_y, slow.mean_y, epsilon = 1e-9);
        assert_relative_eq!(fast.covariance, slow.covariance, epsilon = 1e-9);
        assert_relative_eq!(fast.variance, slow.variance, epsilon = 1e-9);
    }
}
