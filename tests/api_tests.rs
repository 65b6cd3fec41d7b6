//! Tests for the public builder API.
//!
//! These tests exercise only the public prelude, exactly as a downstream
//! crate would.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ace_rs::prelude::*;

/// Monotone nonlinear data with distinct values in every column.
fn sample_data(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 / n as f64 * 4.0).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v + 1.0).ln() + 0.1 * v * v).collect();
    (vec![x], y)
}

// ============================================================================
// Builder Configuration Tests
// ============================================================================

/// Test that the default configuration builds.
#[test]
fn test_default_build() {
    let ace = Ace::new().build().unwrap();
    assert_relative_eq!(ace.bass_enhancement, 0.0);
    assert_eq!(ace.max_outer, 200);
}

/// Test a fully customized configuration.
#[test]
fn test_custom_build() {
    let ace = Ace::new()
        .bass_enhancement(5.0)
        .window_policy(Recompute)
        .max_outer_iterations(50)
        .build()
        .unwrap();
    assert_relative_eq!(ace.bass_enhancement, 5.0);
    assert_eq!(ace.window_policy, WindowPolicy::Recompute);
    assert_eq!(ace.max_outer, 50);
}

/// Test that setting a parameter twice is rejected at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let err = Ace::new()
        .bass_enhancement(1.0)
        .bass_enhancement(2.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        AceError::DuplicateParameter {
            parameter: "bass_enhancement",
        }
    );
}

/// Test that an out-of-range bass enhancement is rejected at build time.
#[test]
fn test_invalid_bass_enhancement_rejected() {
    let err = Ace::new().bass_enhancement(11.0).build().unwrap_err();
    assert_eq!(err, AceError::InvalidBassEnhancement(11.0));
}

/// Test that a zero iteration cap is rejected at build time.
#[test]
fn test_zero_iteration_cap_rejected() {
    let err = Ace::new().max_outer_iterations(0).build().unwrap_err();
    assert_eq!(err, AceError::InvalidIterationCap(0));
}

// ============================================================================
// Fit Tests
// ============================================================================

/// Test a simple single-predictor fit through the public API.
///
/// On noise-free data the error can keep shrinking all the way to the
/// iteration cap, so this checks fit quality and accounting rather than the
/// stopping reason.
#[test]
fn test_simple_fit() {
    let (x, y) = sample_data(60);
    let ace = Ace::new().build().unwrap();
    let result = ace.fit(&x, &y).unwrap();

    assert_eq!(result.len(), 60);
    assert_eq!(result.num_predictors(), 1);
    assert!(result.final_error < 1e-4);
    assert!(result.outer_iterations >= 1);
}

/// Test that hitting the iteration cap is non-fatal and reported as such.
#[test]
fn test_fit_reports_cap_hit() {
    let (x, y) = sample_data(60);
    let ace = Ace::new().max_outer_iterations(2).build().unwrap();
    let result = ace.fit(&x, &y).unwrap();

    // The error on this data still decreases at the cap; transforms are
    // returned anyway with the stopping reason recorded.
    assert!(!result.converged);
    assert_eq!(result.outer_iterations, 2);
    assert!(result.final_error.is_finite());
}

/// Test that the fitted transforms are normalized.
#[test]
fn test_fit_normalization() {
    let (x, y) = sample_data(80);
    let ace = Ace::new().build().unwrap();
    let result = ace.fit(&x, &y).unwrap();

    let mean_theta = result.y_transform.iter().sum::<f64>() / 80.0;
    let mean_phi = result.x_transforms[0].iter().sum::<f64>() / 80.0;
    assert_relative_eq!(mean_theta, 0.0, epsilon = 1e-8);
    assert_relative_eq!(mean_phi, 0.0, epsilon = 1e-8);
}

/// Test a fit with an alternative fixed-span strategy.
#[test]
fn test_fit_with_fixed_span_strategy() {
    let (x, y) = sample_data(60);
    let ace = Ace::new().build().unwrap();
    let strategy = FixedSpanSmoother::default();
    let result = ace.fit_with(&strategy, &x, &y).unwrap();
    assert!(result.converged);
}

/// Test the combined fit-and-model entry point.
#[test]
fn test_fit_model() {
    let (x, y) = sample_data(60);
    let ace = Ace::new().build().unwrap();
    let (result, model) = ace.fit_model(&x, &y).unwrap();

    assert_eq!(model.num_predictors(), result.num_predictors());
    let prediction = model.eval(&[2.0]).unwrap();
    assert!(prediction.is_finite());
}

// ============================================================================
// Input Error Tests
// ============================================================================

/// Test that fit validates its input shape.
#[test]
fn test_fit_rejects_mismatched_input() {
    let ace = Ace::new().build().unwrap();
    let err = ace
        .fit(&[vec![1.0, 2.0]], &[1.0, 2.0, 3.0])
        .unwrap_err();
    assert_eq!(
        err,
        AceError::MismatchedInputs {
            column: 0,
            x_len: 2,
            y_len: 3,
        }
    );
}

/// Test that duplicate predictor values surface from the smoother.
#[test]
fn test_fit_rejects_duplicate_values() {
    let ace = Ace::new().build().unwrap();
    let x = vec![vec![1.0, 2.0, 2.0, 3.0]];
    let y = vec![1.0, 2.0, 3.0, 4.0];
    let err = ace.fit(&x, &y).unwrap_err();
    assert!(matches!(err, AceError::DuplicateXValues { .. }));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the result summary rendering.
#[test]
fn test_result_display() {
    let (x, y) = sample_data(40);
    let ace = Ace::new().build().unwrap();
    let result = ace.fit(&x, &y).unwrap();

    let rendered = format!("{}", result);
    assert!(rendered.contains("Data points:"));
    assert!(rendered.contains("Predictors:"));
    assert!(rendered.contains("Theta"));
    assert!(rendered.contains("Phi_0"));
}

/// Test that long results elide interior rows in the display.
#[test]
fn test_result_display_elides_rows() {
    let mut rng = StdRng::seed_from_u64(2);
    let x: Vec<f64> = (0..100)
        .map(|i| i as f64 + rng.random_range(0.0..0.5))
        .collect();
    let y: Vec<f64> = x.iter().map(|&v| v.sqrt()).collect();

    let ace = Ace::new().build().unwrap();
    let result = ace.fit(&[x], &y).unwrap();
    let rendered = format!("{}", result);
    assert!(rendered.contains("..."));
}
