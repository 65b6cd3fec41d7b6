//! The alternating conditional expectation loops.
//!
//! ## Purpose
//!
//! This module runs the core ACE computation: alternating between updating
//! the predictor transforms phi_k and the response transform theta until the
//! unexplained error stops decreasing.
//!
//! ## Key concepts
//!
//! 1. **Initialization**: theta starts as the standardized response, every
//!    phi_k starts at zero, and one stable sort permutation per column is
//!    computed up front and reused by every iteration.
//! 2. **Inner loop**: For each predictor in turn, phi_k is refitted as the
//!    smooth of `theta - sum(phi_i, i != k)` against x_k and recentered.
//!    Updates are sequential, so later predictors see earlier updates within
//!    the same sweep. The sweep repeats while the error strictly decreases.
//! 3. **Outer loop**: After each inner loop, theta is refitted as the smooth
//!    of `sum(phi)` against y, recentered and rescaled to unit standard
//!    deviation. The outer loop repeats while the error strictly decreases,
//!    up to a hard iteration cap.
//!
//! ## Invariants
//!
//! * The error sequence observed by each loop is strictly decreasing while
//!   the loop runs; the first non-improving iterate terminates it.
//! * The first error comparison is made against +infinity, so both loops
//!   always run at least once on well-formed input.
//! * Each phi_k has mean 0 after its update; theta has mean 0 and population
//!   standard deviation 1 after its update.
//!
//! ## Non-goals
//!
//! * This module does not validate input (the API layer does) beyond what
//!   the smoothers themselves enforce.
//! * This module does not build continuous interpolants.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::SmoothingStrategy;
use crate::math::accumulate::WindowAccumulator;
use crate::math::stats::{center_in_place, column_sum, mean, mean_squared_error, population_std};
use crate::primitives::errors::AceError;
use crate::primitives::sorting::{apply_permutation, sort_order, unsort};

// Modular dependencies
use super::output::AceResult;

/// Hard cap on outer iterations.
pub const MAX_OUTER_ITERATIONS: usize = 200;

// ============================================================================
// Solver
// ============================================================================

/// Runs the alternating conditional expectation algorithm.
#[derive(Debug, Clone)]
pub struct AceSolver<S> {
    /// Conditional-expectation estimator used for every smoothing pass.
    pub strategy: S,

    /// Maximum number of outer iterations before giving up.
    pub max_outer: usize,
}

impl<S> AceSolver<S> {
    /// Create a solver with the default iteration cap.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_outer: MAX_OUTER_ITERATIONS,
        }
    }

    /// Fit transforms for the given predictor columns and response.
    ///
    /// Input is assumed validated for shape and finiteness. Duplicate values
    /// within any column surface as [`AceError::DuplicateXValues`] from the
    /// smoothing passes.
    pub fn solve<T>(&self, x: &[Vec<T>], y: &[T]) -> Result<AceResult<T>, AceError>
    where
        T: Float + WindowAccumulator,
        S: SmoothingStrategy<T>,
    {
        let mut state = SolverState::initialize(x, y);

        let mut last_outer = T::infinity();
        let mut outer_iterations = 0;
        let mut inner_iterations = 0;
        let mut converged = false;

        loop {
            let current = state.unexplained_error();
            let decreasing = current < last_outer;
            last_outer = current;

            if !decreasing {
                converged = true;
                break;
            }
            if outer_iterations >= self.max_outer {
                warn!(
                    "stopping after {} outer iterations with error still decreasing (err = {:e})",
                    outer_iterations,
                    current.to_f64().unwrap_or(f64::NAN)
                );
                break;
            }

            debug!(
                "outer iteration {:03}, err = {:e}",
                outer_iterations,
                current.to_f64().unwrap_or(f64::NAN)
            );

            inner_iterations += state.update_x_transforms(&self.strategy)?;
            state.update_y_transform(&self.strategy)?;
            outer_iterations += 1;
        }

        Ok(AceResult {
            x_transforms: state.phi,
            y_transform: state.theta,
            outer_iterations,
            inner_iterations,
            final_error: last_outer,
            converged,
        })
    }
}

// ============================================================================
// Solver State
// ============================================================================

/// Mutable fitting state shared by the inner and outer loops.
struct SolverState<T> {
    /// Response transform theta(y), original order.
    theta: Vec<T>,

    /// Predictor transforms phi_k(x_k), original order.
    phi: Vec<Vec<T>>,

    /// Each predictor column gathered into sorted order.
    x_sorted: Vec<Vec<T>>,

    /// Sort permutation of each predictor column.
    x_orders: Vec<Vec<usize>>,

    /// The response gathered into sorted order.
    y_sorted: Vec<T>,

    /// Sort permutation of the response.
    y_order: Vec<usize>,
}

impl<T: Float + WindowAccumulator> SolverState<T> {
    /// Normalize the response, zero the predictor transforms, and compute
    /// every sort permutation once.
    fn initialize(x: &[Vec<T>], y: &[T]) -> Self {
        let n = y.len();

        let mut theta: Vec<T> = y.to_vec();
        center_in_place(&mut theta);
        let std = population_std(&theta);
        if std > T::zero() {
            for t in theta.iter_mut() {
                *t = *t / std;
            }
        }

        let phi = x.iter().map(|_| vec![T::zero(); n]).collect();

        let x_orders: Vec<Vec<usize>> = x.iter().map(|column| sort_order(column)).collect();
        let x_sorted = x
            .iter()
            .zip(x_orders.iter())
            .map(|(column, order)| apply_permutation(column, order))
            .collect();

        let y_order = sort_order(y);
        let y_sorted = apply_permutation(y, &y_order);

        Self {
            theta,
            phi,
            x_sorted,
            x_orders,
            y_sorted,
            y_order,
        }
    }

    /// Mean squared residual between theta and the sum of the phis.
    fn unexplained_error(&self) -> T {
        let sum_phi = column_sum(&self.phi, self.theta.len());
        mean_squared_error(&self.theta, &sum_phi)
    }

    /// Run the inner loop until the error stops decreasing.
    ///
    /// Returns the number of sweeps performed.
    fn update_x_transforms<S>(&mut self, strategy: &S) -> Result<usize, AceError>
    where
        S: SmoothingStrategy<T>,
    {
        let mut last_inner = T::infinity();
        let mut sweeps = 0;

        loop {
            let current = self.unexplained_error();
            if !(current < last_inner) {
                break;
            }
            last_inner = current;

            debug!(
                "  inner iteration {:03}, err = {:e}",
                sweeps,
                current.to_f64().unwrap_or(f64::NAN)
            );

            self.sweep_x_transforms(strategy)?;
            sweeps += 1;
        }

        Ok(sweeps)
    }

    /// One sequential sweep over all predictor transforms.
    ///
    /// For each predictor k, smooths `theta - sum(phi_i, i != k)` against
    /// x_k and recenters the result. The running residual is patched in
    /// place, so predictor k+1 sees predictor k's fresh update.
    fn sweep_x_transforms<S>(&mut self, strategy: &S) -> Result<(), AceError>
    where
        S: SmoothingStrategy<T>,
    {
        let n = self.theta.len();

        // theta - sum of all phis, original order
        let sum_phi = column_sum(&self.phi, n);
        let mut residual: Vec<T> = self
            .theta
            .iter()
            .zip(sum_phi.iter())
            .map(|(&t, &s)| t - s)
            .collect();

        for k in 0..self.phi.len() {
            let order = &self.x_orders[k];

            // Adding phi_k back in leaves theta - sum(phi_i, i != k)
            let target_sorted: Vec<T> = order
                .iter()
                .map(|&i| residual[i] + self.phi[k][i])
                .collect();

            let mut smooth = strategy.smooth_sorted(&self.x_sorted[k], &target_sorted)?;
            center_in_place(&mut smooth);

            let updated = unsort(&smooth, order);
            for i in 0..n {
                residual[i] = residual[i] + self.phi[k][i] - updated[i];
            }
            self.phi[k] = updated;
        }

        Ok(())
    }

    /// Refit theta as the smooth of sum(phi) against the response, then
    /// recenter and rescale to unit population standard deviation.
    fn update_y_transform<S>(&mut self, strategy: &S) -> Result<(), AceError>
    where
        S: SmoothingStrategy<T>,
    {
        let sum_phi_sorted: Vec<T> = self
            .y_order
            .iter()
            .map(|&i| {
                self.phi
                    .iter()
                    .fold(T::zero(), |acc, transform| acc + transform[i])
            })
            .collect();

        let mut smooth = strategy.smooth_sorted(&self.y_sorted, &sum_phi_sorted)?;

        let m = mean(&smooth);
        for v in smooth.iter_mut() {
            *v = *v - m;
        }
        let std = population_std(&smooth);
        if std > T::zero() {
            for v in smooth.iter_mut() {
                *v = *v / std;
            }
        }

        self.theta = unsort(&smooth, &self.y_order);
        Ok(())
    }
}
