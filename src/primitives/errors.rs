//! Error types for ACE operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during ACE regression,
//! including input validation, smoother preconditions, and model evaluation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is caught and surfaced at `build()` time.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Smoother preconditions**: Duplicate x-values break the sorted-window invariant.
//! 3. **Parameter validation**: Invalid span, bass enhancement, or iteration cap.
//! 4. **Evaluation errors**: Predictor-count mismatch at model evaluation time.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for ACE operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AceError {
    /// Input arrays are empty; ACE requires at least 2 observations.
    EmptyInput,

    /// A predictor column and the response must have the same number of elements.
    MismatchedInputs {
        /// Index of the offending predictor column.
        column: usize,
        /// Number of elements in the predictor column.
        x_len: usize,
        /// Number of elements in the response.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Number of observations is below the smoother's minimum window.
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// A column contains no variation, so its transform is undefined.
    ConstantColumn {
        /// Human-readable column label (e.g., "y" or "x[2]").
        column: String,
    },

    /// A column fed to the fixed-span smoother contains non-unique values.
    ///
    /// The incremental window bookkeeping assumes a strict ordering of the
    /// sorted x-values, so ties cannot be smoothed.
    DuplicateXValues {
        /// Sorted position at which the first tie occurs.
        sorted_index: usize,
    },

    /// Smoothing span must be in the range (0, 1].
    InvalidSpan(f64),

    /// Bass enhancement must be in the range [0, 10].
    InvalidBassEnhancement(f64),

    /// The outer iteration cap must be at least 1.
    InvalidIterationCap(usize),

    /// Model evaluation received the wrong number of predictor values.
    ArityMismatch {
        /// Number of predictors the model was trained with.
        expected: usize,
        /// Number of values provided.
        got: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// File I/O failure while reading or writing column data.
    #[cfg(feature = "std")]
    Io(String),

    /// A text field could not be parsed as a number.
    #[cfg(feature = "std")]
    Parse {
        /// Line number (1-based) of the offending row.
        line: usize,
        /// The field that failed to parse.
        field: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                column,
                x_len,
                y_len,
            } => {
                write!(
                    f,
                    "Length mismatch: x[{column}] has {x_len} points, y has {y_len}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::ConstantColumn { column } => {
                write!(f, "Column {column} is constant and cannot be transformed")
            }
            Self::DuplicateXValues { sorted_index } => {
                write!(
                    f,
                    "Duplicate x-values at sorted position {sorted_index}; smoothing requires strictly distinct values"
                )
            }
            Self::InvalidSpan(span) => {
                write!(f, "Invalid span: {span} (must be > 0 and <= 1)")
            }
            Self::InvalidBassEnhancement(alpha) => {
                write!(
                    f,
                    "Invalid bass enhancement: {alpha} (must be in [0, 10])"
                )
            }
            Self::InvalidIterationCap(cap) => {
                write!(f, "Invalid iteration cap: {cap} (must be at least 1)")
            }
            Self::ArityMismatch { expected, got } => {
                write!(
                    f,
                    "Evaluation arity mismatch: model has {expected} predictors, got {got} values"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            #[cfg(feature = "std")]
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            #[cfg(feature = "std")]
            Self::Parse { line, field } => {
                write!(f, "Parse error on line {line}: '{field}' is not a number")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AceError {}
