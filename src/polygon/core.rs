//! Core polygon type, area, and winding.

use crate::primitives::Point2;
use num_traits::Float;

/// Orientation of a polygon's vertex sequence, from the sign of its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero area (degenerate).
    None,
}

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the winding of the vertex sequence.
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > F::zero() {
            Winding::CounterClockwise
        } else if area < F::zero() {
            Winding::Clockwise
        } else {
            Winding::None
        }
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.winding() == Winding::Clockwise {
            self.vertices.reverse();
        }
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// Returns true if all cross products of consecutive edges above `eps` in
/// magnitude have the same sign. Thin cells produced by nearly collinear
/// sites need a tolerance here.
pub fn polygon_is_convex_within<F: Float>(vertices: &[Point2<F>], eps: F) -> bool {
    if vertices.len() < 3 {
        return true; // Degenerate cases are considered convex
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let cross = (b - a).cross(c - b);

        if cross.abs() > eps {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}

/// Tests if a polygon is convex, using machine epsilon as the tolerance.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    polygon_is_convex_within(vertices, F::epsilon())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn unit_square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_polygon_empty() {
        let poly: Polygon<f64> = Polygon::empty();
        assert!(poly.is_empty());
        assert_eq!(poly.len(), 0);
        assert_eq!(poly.winding(), Winding::None);
    }

    #[test]
    fn test_polygon_area_triangle() {
        let poly = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        ]);
        assert!(approx_eq(poly.area(), 2.0, 1e-10));
    }

    #[test]
    fn test_winding() {
        let ccw = Polygon::new(unit_square());
        assert_eq!(ccw.winding(), Winding::CounterClockwise);
        assert!(approx_eq(ccw.signed_area(), 1.0, 1e-10));

        let mut cw_vertices = unit_square();
        cw_vertices.reverse();
        let cw = Polygon::new(cw_vertices);
        assert_eq!(cw.winding(), Winding::Clockwise);
        assert!(approx_eq(cw.signed_area(), -1.0, 1e-10));
    }

    #[test]
    fn test_ensure_ccw() {
        let mut vertices = unit_square();
        vertices.reverse();
        let mut poly = Polygon::new(vertices);
        poly.ensure_ccw();
        assert_eq!(poly.winding(), Winding::CounterClockwise);
        assert_eq!(poly.vertices[0], Point2::new(0.0, 1.0));

        // Already CCW polygons are left untouched.
        let mut ccw = Polygon::new(unit_square());
        ccw.ensure_ccw();
        assert_eq!(ccw.vertices, unit_square());
    }

    #[test]
    fn test_contains() {
        let poly = Polygon::new(unit_square());
        assert!(poly.contains(Point2::new(0.5, 0.5)));
        assert!(!poly.contains(Point2::new(1.5, 0.5)));
    }

    #[test]
    fn test_is_convex() {
        assert!(Polygon::new(unit_square()).is_convex());

        let dart = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.5, 1.0),
        ]);
        assert!(!dart.is_convex());
    }

    #[test]
    fn test_collinear_run_is_convex() {
        let poly = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        assert!(poly.is_convex());
        assert!(approx_eq(polygon_area(&poly.vertices), 4.0, 1e-10));
    }
}
