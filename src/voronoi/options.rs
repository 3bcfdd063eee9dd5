//! Numeric tolerances used by the sweep and the region builder.

use num_traits::Float;

/// Tolerances for diagram construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiOptions<F> {
    /// Bisectors whose determinant magnitude is below this are treated as
    /// parallel and never intersect.
    pub parallel_epsilon: F,
    /// Distance under which two points count as the same when stitching a
    /// region outline.
    pub close_enough: F,
}

impl<F: Float> Default for VoronoiOptions<F> {
    fn default() -> Self {
        Self {
            parallel_epsilon: super::constant(1e-10),
            close_enough: super::constant(0.005),
        }
    }
}

impl<F: Float> VoronoiOptions<F> {
    /// Sets the determinant threshold for parallel bisectors.
    pub fn with_parallel_epsilon(mut self, eps: F) -> Self {
        self.parallel_epsilon = eps;
        self
    }

    /// Sets the point-merging distance for region outlines.
    pub fn with_close_enough(mut self, distance: F) -> Self {
        self.close_enough = distance;
        self
    }
}
