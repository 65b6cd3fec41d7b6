//! Continuous model built on a finished ACE fit.
//!
//! ## Purpose
//!
//! ACE itself returns transforms as discrete data points. This module wraps
//! a finished fit in piecewise-linear interpolants so the regression can be
//! evaluated at any predictor combination within the trained range.
//!
//! ## Key concepts
//!
//! * **Transform interpolants**: One interpolant per predictor maps a raw
//!   predictor value to its transform phi_k.
//! * **Inverse response map**: An interpolant over (theta, y) maps a summed
//!   transform back to the response scale.
//! * **Clamping**: Queries outside the trained range return the minimum or
//!   maximum trained value instead of extrapolating.
//!
//! ## Non-goals
//!
//! * This module does not rerun the regression; a model is a read-only view
//!   of one fit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::Interp1d;
use crate::primitives::errors::AceError;

// ============================================================================
// Model
// ============================================================================

/// A continuous model of data based on an ACE regression.
#[derive(Debug, Clone)]
pub struct Model<T> {
    /// One transform interpolant per predictor.
    phi: Vec<Interp1d<T>>,

    /// Maps a summed transform back to the response scale.
    inverse_theta: Interp1d<T>,
}

impl<T: Float> Model<T> {
    /// Build interpolants over a finished fit.
    ///
    /// `x` and `y` must be the data the transforms were fitted from.
    pub fn new(x: &[Vec<T>], y: &[T], x_transforms: &[Vec<T>], y_transform: &[T]) -> Self {
        let phi = x
            .iter()
            .zip(x_transforms.iter())
            .map(|(column, transform)| {
                let (lo, hi) = min_max(transform);
                Interp1d::new(column, transform, lo, hi)
            })
            .collect();

        let (y_lo, y_hi) = min_max(y);
        let inverse_theta = Interp1d::new(y_transform, y, y_lo, y_hi);

        Self { phi, inverse_theta }
    }

    /// Evaluate the regression at one combination of predictor values.
    ///
    /// # Errors
    ///
    /// [`AceError::ArityMismatch`] if the number of values differs from the
    /// number of predictors the model was trained with.
    pub fn eval(&self, x_values: &[T]) -> Result<T, AceError> {
        if x_values.len() != self.phi.len() {
            return Err(AceError::ArityMismatch {
                expected: self.phi.len(),
                got: x_values.len(),
            });
        }

        let sum_phi = self
            .phi
            .iter()
            .zip(x_values.iter())
            .fold(T::zero(), |acc, (phi, &xi)| acc + phi.eval(xi));

        Ok(self.inverse_theta.eval(sum_phi))
    }

    /// Evaluate a single predictor's transform.
    ///
    /// # Errors
    ///
    /// [`AceError::ArityMismatch`] if `index` is out of range.
    pub fn eval_transform(&self, index: usize, x_value: T) -> Result<T, AceError> {
        let phi = self.phi.get(index).ok_or(AceError::ArityMismatch {
            expected: self.phi.len(),
            got: index + 1,
        })?;
        Ok(phi.eval(x_value))
    }

    /// Number of predictors the model was trained with.
    pub fn num_predictors(&self) -> usize {
        self.phi.len()
    }
}

/// Smallest and largest value of a slice.
fn min_max<T: Float>(values: &[T]) -> (T, T) {
    values.iter().fold(
        (T::infinity(), T::neg_infinity()),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}
