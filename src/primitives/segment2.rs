//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Used for clipped Voronoi edges, Delaunay links, and hull sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_midpoint() {
        let s: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(6.0, 8.0));
        assert_eq!(s.length(), 10.0);
        assert_eq!(s.midpoint(), Point2::new(3.0, 4.0));
        assert_eq!(s.direction(), Vec2::new(6.0, 8.0));
    }

    #[test]
    fn test_reversed() {
        let s: Segment2<f64> = (Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)).into();
        let r = s.reversed();
        assert_eq!(r.start, Point2::new(3.0, 4.0));
        assert_eq!(r.end, Point2::new(1.0, 2.0));
    }
}
