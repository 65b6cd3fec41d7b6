//! Sliding-window statistics for the fixed-span smoother.
//!
//! This module provides the running-statistics accumulator that walks a
//! symmetric window over sorted scatter data. The accumulator is ephemeral:
//! it is created fresh for every smoothing pass and discarded afterwards,
//! never shared across unrelated smoothing invocations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::accumulate::WindowAccumulator;

// ============================================================================
// Window Update Policy
// ============================================================================

/// Policy for maintaining window statistics while the window slides.
///
/// `Incremental` is the production path. `Recompute` rebuilds every statistic
/// from scratch on each slide and exists to validate the incremental updates;
/// the two must agree to floating-point tolerance on identical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// O(1) add/remove updates of means, covariance, and variance.
    #[default]
    Incremental,

    /// Full recomputation over the window contents on every slide.
    Recompute,
}

// ============================================================================
// Window Statistics
// ============================================================================

/// Running statistics over a contiguous window of sorted scatter data.
///
/// Tracks the window bounds together with the mean of x and y, the
/// covariance `sum((x - mean_x) * (y - mean_y))`, and the variance
/// `sum((x - mean_x)^2)` of the points currently inside the window.
#[derive(Debug, Clone)]
pub struct WindowStats<T> {
    /// Index of the leftmost point in the window (inclusive).
    pub lower: usize,

    /// Number of points currently in the window.
    pub size: usize,

    /// Mean of the x-values in the window.
    pub mean_x: T,

    /// Mean of the y-values in the window.
    pub mean_y: T,

    /// Centered cross-moment of the window.
    pub covariance: T,

    /// Centered second moment of the x-values in the window.
    pub variance: T,
}

impl<T: Float + WindowAccumulator> WindowStats<T> {
    /// Build statistics from scratch over `x[lower..lower + size]`.
    pub fn compute(x: &[T], y: &[T], lower: usize, size: usize) -> Self {
        let xs = &x[lower..lower + size];
        let ys = &y[lower..lower + size];

        let (sum_x, sum_y) = T::window_sums(xs, ys);
        let count = T::from(size).unwrap();
        let mean_x = sum_x / count;
        let mean_y = sum_y / count;
        let (covariance, variance) = T::centered_moments(xs, ys, mean_x, mean_y);

        Self {
            lower,
            size,
            mean_x,
            mean_y,
            covariance,
            variance,
        }
    }

    /// Slide the window one step to the right.
    ///
    /// Drops the leftmost point and admits `x[lower + size]`, which must
    /// exist. With `WindowPolicy::Recompute` all statistics are rebuilt from
    /// the new window contents instead of being updated in place.
    pub fn advance(&mut self, x: &[T], y: &[T], policy: WindowPolicy) {
        match policy {
            WindowPolicy::Incremental => {
                let drop_idx = self.lower;
                let admit_idx = self.lower + self.size;
                self.remove(x[drop_idx], y[drop_idx]);
                self.add(x[admit_idx], y[admit_idx]);
                self.lower += 1;
            }
            WindowPolicy::Recompute => {
                *self = Self::compute(x, y, self.lower + 1, self.size);
            }
        }
    }

    /// Admit one observation, updating means first and moments second.
    ///
    /// The moment update uses the post-add means, which makes the
    /// `(n + 1) / n` scaling exact.
    pub fn add(&mut self, xj: T, yj: T) {
        let count = T::from(self.size).unwrap();
        let one = T::one();

        self.mean_x = (count * self.mean_x + xj) / (count + one);
        self.mean_y = (count * self.mean_y + yj) / (count + one);

        let term = (count + one) / count * (xj - self.mean_x);
        self.covariance = self.covariance + term * (yj - self.mean_y);
        self.variance = self.variance + term * (xj - self.mean_x);

        self.size += 1;
    }

    /// Remove one observation, updating moments first and means second.
    ///
    /// The moment update uses the pre-removal means, which makes the
    /// `n / (n - 1)` scaling exact.
    pub fn remove(&mut self, xj: T, yj: T) {
        let count = T::from(self.size).unwrap();
        let one = T::one();

        let term = count / (count - one) * (xj - self.mean_x);
        self.covariance = self.covariance - term * (yj - self.mean_y);
        self.variance = self.variance - term * (xj - self.mean_x);

        self.mean_x = (count * self.mean_x - xj) / (count - one);
        self.mean_y = (count * self.mean_y - yj) / (count - one);

        self.size -= 1;
    }

    /// Index one past the rightmost point in the window.
    #[inline]
    pub fn upper(&self) -> usize {
        self.lower + self.size
    }
}
