//! Input validation for ACE configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for ACE configuration
//! parameters and input data. It checks requirements such as column
//! lengths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like span in (0, 1] and
//!   bass enhancement in [0, 10].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Degeneracy Checks**: Rejects a constant response up front, since its
//!   normalized transform is undefined.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not detect duplicate x-values (the smoother does,
//!   on sorted data).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AceError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for ACE configuration and input data.
///
/// Provides static methods for validating various ACE parameters and
/// input data. All methods return `Result<(), AceError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate predictor columns and the response for an ACE fit.
    pub fn validate_inputs<T: Float>(x: &[Vec<T>], y: &[T]) -> Result<(), AceError> {
        // Check 1: Non-empty data
        if x.is_empty() || y.is_empty() {
            return Err(AceError::EmptyInput);
        }

        // Check 2: Matching column lengths
        let n = y.len();
        for (k, column) in x.iter().enumerate() {
            if column.len() != n {
                return Err(AceError::MismatchedInputs {
                    column: k,
                    x_len: column.len(),
                    y_len: n,
                });
            }
        }

        // Check 3: Sufficient points for the local-linear window
        if n < 2 {
            return Err(AceError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(AceError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (k, column) in x.iter().enumerate() {
            for (i, &val) in column.iter().enumerate() {
                if !val.is_finite() {
                    return Err(AceError::InvalidNumericValue(format!(
                        "x[{}][{}]={}",
                        k,
                        i,
                        val.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        // Check 5: The response must vary, or its normalization is undefined
        Self::validate_varies(y, "y")?;

        Ok(())
    }

    /// Validate that a column is not constant.
    pub fn validate_varies<T: Float>(values: &[T], name: &str) -> Result<(), AceError> {
        if values.is_empty() {
            return Err(AceError::EmptyInput);
        }
        let first = values[0];
        if values.iter().all(|&v| v == first) {
            return Err(AceError::ConstantColumn {
                column: String::from(name),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a smoothing span.
    pub fn validate_span(span: f64) -> Result<(), AceError> {
        if !span.is_finite() || span <= 0.0 || span > 1.0 {
            return Err(AceError::InvalidSpan(span));
        }
        Ok(())
    }

    /// Validate the bass enhancement alpha.
    pub fn validate_bass_enhancement(alpha: f64) -> Result<(), AceError> {
        if !alpha.is_finite() || !(0.0..=10.0).contains(&alpha) {
            return Err(AceError::InvalidBassEnhancement(alpha));
        }
        Ok(())
    }

    /// Validate the outer iteration cap.
    pub fn validate_iteration_cap(cap: usize) -> Result<(), AceError> {
        if cap == 0 {
            return Err(AceError::InvalidIterationCap(cap));
        }
        Ok(())
    }

    // ========================================================================
    // Evaluation Validation
    // ========================================================================

    /// Validate the number of predictor values supplied for evaluation.
    pub fn validate_arity(expected: usize, got: usize) -> Result<(), AceError> {
        if expected != got {
            return Err(AceError::ArityMismatch { expected, got });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), AceError> {
        if let Some(parameter) = duplicate_param {
            return Err(AceError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
