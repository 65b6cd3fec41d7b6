#![cfg(feature = "dev")]
//! Tests for the basic statistics helpers.

use approx::assert_relative_eq;

use ace_rs::internals::math::stats::{
    center_in_place, column_sum, mean, mean_squared_error, population_std,
};

// ============================================================================
// Moment Tests
// ============================================================================

/// Test the arithmetic mean.
#[test]
fn test_mean() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_relative_eq!(mean::<f64>(&[]), 0.0);
}

/// Test the population standard deviation (divide by N).
#[test]
fn test_population_std() {
    // Deviations from mean 2.5: [-1.5, -0.5, 0.5, 1.5]; SS = 5; SS/4 = 1.25
    let std = population_std(&[1.0, 2.0, 3.0, 4.0]);
    assert_relative_eq!(std, 1.25_f64.sqrt(), epsilon = 1e-12);
}

/// Test that a constant slice has zero standard deviation.
#[test]
fn test_population_std_constant() {
    assert_relative_eq!(population_std(&[3.0, 3.0, 3.0]), 0.0);
}

/// Test in-place centering.
#[test]
fn test_center_in_place() {
    let mut values = [1.0, 2.0, 3.0];
    let removed = center_in_place(&mut values);
    assert_relative_eq!(removed, 2.0);
    assert_relative_eq!(mean(&values), 0.0, epsilon = 1e-12);
}

// ============================================================================
// Aggregate Tests
// ============================================================================

/// Test the mean squared difference of two slices.
#[test]
fn test_mean_squared_error() {
    let a = [1.0, 2.0, 3.0];
    let b = [2.0, 2.0, 5.0];
    // (1 + 0 + 4) / 3
    assert_relative_eq!(mean_squared_error(&a, &b), 5.0 / 3.0, epsilon = 1e-12);
}

/// Test element-wise summation of columns.
#[test]
fn test_column_sum() {
    let columns = vec![vec![1.0, 2.0], vec![10.0, 20.0], vec![100.0, 200.0]];
    let total = column_sum(&columns, 2);
    assert_relative_eq!(total[0], 111.0);
    assert_relative_eq!(total[1], 222.0);
}
