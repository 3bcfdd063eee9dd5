//! 2D circle type.

use super::Point2;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// A site's enclosing circle has radius zero when the site's cell is open
/// toward the hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if the circle has zero radius.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius == F::zero()
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}
