//! Output types and result structures for ACE regressions.
//!
//! ## Purpose
//!
//! This module defines the `AceResult` struct which encapsulates all outputs
//! from an ACE fit: the fitted transforms, iteration counts, and the final
//! unexplained error.
//!
//! ## Design notes
//!
//! * **Original order**: Transforms are stored in the order the observations
//!   were supplied, not in sorted order.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All transform vectors have the same length as the input data.
//! * The response transform has mean 0; the predictor transforms each have
//!   mean 0 up to floating-point error.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not build continuous interpolants (the evaluation
//!   layer does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of an ACE fit.
#[derive(Debug, Clone, PartialEq)]
pub struct AceResult<T> {
    /// Fitted predictor transforms phi_k(x_k), one vector per predictor,
    /// in original observation order.
    pub x_transforms: Vec<Vec<T>>,

    /// Fitted response transform theta(y), in original observation order.
    pub y_transform: Vec<T>,

    /// Number of outer iterations performed.
    pub outer_iterations: usize,

    /// Total number of inner iterations across all outer iterations.
    pub inner_iterations: usize,

    /// Final unexplained error, mean((theta - sum(phi))^2).
    pub final_error: T,

    /// Whether the outer loop stopped because the error stopped decreasing,
    /// rather than by hitting the iteration cap.
    pub converged: bool,
}

impl<T: Float> AceResult<T> {
    /// Number of observations in the fit.
    pub fn len(&self) -> usize {
        self.y_transform.len()
    }

    /// True if the fit contains no observations.
    pub fn is_empty(&self) -> bool {
        self.y_transform.is_empty()
    }

    /// Number of predictors in the fit.
    pub fn num_predictors(&self) -> usize {
        self.x_transforms.len()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for AceResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:      {}", self.len())?;
        writeln!(f, "  Predictors:       {}", self.num_predictors())?;
        writeln!(f, "  Outer iterations: {}", self.outer_iterations)?;
        writeln!(f, "  Inner iterations: {}", self.inner_iterations)?;
        writeln!(f, "  Final error:      {}", self.final_error)?;
        writeln!(
            f,
            "  Converged:        {}",
            if self.converged { "yes" } else { "no (iteration cap)" }
        )?;
        writeln!(f)?;

        writeln!(f, "Transforms:")?;
        write!(f, "{:>8}", "Theta")?;
        for k in 0..self.num_predictors() {
            write!(f, " {:>12}", format!("Phi_{}", k))?;
        }
        writeln!(f)?;

        let line_width = 8 + 13 * self.num_predictors();
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.4}", self.y_transform[idx])?;
            for transform in &self.x_transforms {
                write!(f, " {:>12.6}", transform[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
