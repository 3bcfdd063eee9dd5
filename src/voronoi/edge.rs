//! Bisector edges: implicit line, endpoint vertices, and clipped segment.

use super::site::{SiteId, SiteList};
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Index of an edge in the diagram's edge list.
pub type EdgeId = usize;

/// Index of a resolved Voronoi vertex.
pub type VertexId = usize;

/// Orientation tag for the two ends (and the two sites) of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A resolved Voronoi vertex. Identity is the `id`; two circle events that
/// land on the same coordinate still produce two vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<F> {
    pub id: VertexId,
    pub point: Point2<F>,
}

/// Edge endpoints after clipping to the plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedEnds<F> {
    pub left: Point2<F>,
    pub right: Point2<F>,
}

impl<F: Float> ClippedEnds<F> {
    /// Returns the clipped end on `side`.
    #[inline]
    pub fn get(&self, side: Side) -> Point2<F> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A Voronoi edge: the perpendicular bisector `a*x + b*y = c` between two
/// sites.
///
/// Whichever of `a`, `b` has the larger magnitude is fixed to exactly 1, so
/// nearly axis-aligned bisectors keep their precision. An unassigned vertex
/// means the edge runs to infinity on that side.
#[derive(Debug, Clone)]
pub struct Edge<F> {
    a: F,
    b: F,
    c: F,
    left_site: SiteId,
    right_site: SiteId,
    left_coord: Point2<F>,
    right_coord: Point2<F>,
    left_vertex: Option<Vertex<F>>,
    right_vertex: Option<Vertex<F>>,
    clipped: Option<ClippedEnds<F>>,
}

impl<F: Float> Edge<F> {
    /// Builds the bisector between `left` and `right`.
    ///
    /// The two coordinates must differ.
    pub(crate) fn bisect(
        left: SiteId,
        left_coord: Point2<F>,
        right: SiteId,
        right_coord: Point2<F>,
    ) -> Self {
        let d = right_coord - left_coord;
        debug_assert!(d.magnitude_squared() > F::zero(), "bisector of coincident sites");

        let two = F::one() + F::one();
        let mut c = left_coord.x * d.x + left_coord.y * d.y + d.magnitude_squared() / two;
        let (a, b);
        if d.x.abs() > d.y.abs() {
            a = F::one();
            b = d.y / d.x;
            c = c / d.x;
        } else {
            b = F::one();
            a = d.x / d.y;
            c = c / d.y;
        }

        Self {
            a,
            b,
            c,
            left_site: left,
            right_site: right,
            left_coord,
            right_coord,
            left_vertex: None,
            right_vertex: None,
            clipped: None,
        }
    }

    /// Line coefficients `(a, b, c)` of `a*x + b*y = c`.
    #[inline]
    pub fn coefficients(&self) -> (F, F, F) {
        (self.a, self.b, self.c)
    }

    /// `true` when the line is normalized with `a == 1` (solved for x).
    #[inline]
    pub(crate) fn solves_for_x(&self) -> bool {
        self.a == F::one()
    }

    /// Site on the given side of the edge.
    #[inline]
    pub fn site(&self, side: Side) -> SiteId {
        match side {
            Side::Left => self.left_site,
            Side::Right => self.right_site,
        }
    }

    /// Coordinate of the site on the given side.
    #[inline]
    pub fn site_coord(&self, side: Side) -> Point2<F> {
        match side {
            Side::Left => self.left_coord,
            Side::Right => self.right_coord,
        }
    }

    /// The site across this edge from `site`, or `None` if `site` is not
    /// one of its two sites.
    pub fn neighbor_of(&self, site: SiteId) -> Option<SiteId> {
        if site == self.left_site {
            Some(self.right_site)
        } else if site == self.right_site {
            Some(self.left_site)
        } else {
            None
        }
    }

    /// Endpoint vertex on the given side, `None` for a ray to infinity.
    #[inline]
    pub fn vertex(&self, side: Side) -> Option<Vertex<F>> {
        match side {
            Side::Left => self.left_vertex,
            Side::Right => self.right_vertex,
        }
    }

    pub(crate) fn set_vertex(&mut self, side: Side, vertex: Vertex<F>) {
        let slot = match side {
            Side::Left => &mut self.left_vertex,
            Side::Right => &mut self.right_vertex,
        };
        debug_assert!(slot.is_none(), "edge vertex assigned twice");
        *slot = Some(vertex);
    }

    /// `true` if either end is unbounded. Such edges are dual to the
    /// Delaunay triangulation's outer boundary.
    #[inline]
    pub fn is_part_of_convex_hull(&self) -> bool {
        self.left_vertex.is_none() || self.right_vertex.is_none()
    }

    /// Distance between the two sites this edge separates.
    #[inline]
    pub fn sites_distance(&self) -> F {
        self.left_coord.distance(self.right_coord)
    }

    /// `true` once clipping found part of the edge inside the plot bounds.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.clipped.is_some()
    }

    /// Clipped endpoints, `None` before clipping or when not visible.
    #[inline]
    pub fn clipped_ends(&self) -> Option<ClippedEnds<F>> {
        self.clipped
    }

    /// Clipped endpoint on the given side.
    #[inline]
    pub fn clipped_end(&self, side: Side) -> Option<Point2<F>> {
        self.clipped.map(|ends| ends.get(side))
    }

    /// The visible part of the edge, from left end to right end.
    pub fn voronoi_segment(&self) -> Option<Segment2<F>> {
        self.clipped
            .map(|ends| Segment2::new(ends.left, ends.right))
    }

    /// The dual Delaunay link from left site to right site.
    #[inline]
    pub fn delaunay_segment(&self) -> Segment2<F> {
        Segment2::new(self.left_coord, self.right_coord)
    }

    /// Clips the (possibly unbounded) edge to `bounds`.
    ///
    /// The line is parametrized by y when `a == 1` and by x otherwise. Each
    /// end starts at its vertex (or the far bound for an unassigned one) and
    /// is then clamped against the other axis. If the line never crosses
    /// the rectangle the edge stays invisible.
    pub(crate) fn clip_vertices(&mut self, bounds: Aabb2<F>) {
        let (x_min, x_max) = (bounds.left(), bounds.right());
        let (y_min, y_max) = (bounds.top(), bounds.bottom());
        let (a, b, c) = (self.a, self.b, self.c);

        // v0 is the end with the smaller parameter
        let (v0_side, v0, v1) = if self.solves_for_x() && b >= F::zero() {
            (Side::Right, self.right_vertex, self.left_vertex)
        } else {
            (Side::Left, self.left_vertex, self.right_vertex)
        };
        let v0 = v0.map(|v| v.point);
        let v1 = v1.map(|v| v.point);

        let (mut x0, mut y0, mut x1, mut y1);
        if self.solves_for_x() {
            y0 = match v0 {
                Some(v) if v.y > y_min => v.y,
                _ => y_min,
            };
            if y0 > y_max {
                return;
            }
            x0 = c - b * y0;

            y1 = match v1 {
                Some(v) if v.y < y_max => v.y,
                _ => y_max,
            };
            if y1 < y_min {
                return;
            }
            x1 = c - b * y1;

            if (x0 > x_max && x1 > x_max) || (x0 < x_min && x1 < x_min) {
                return;
            }

            if x0 > x_max {
                x0 = x_max;
                y0 = (c - x0) / b;
            } else if x0 < x_min {
                x0 = x_min;
                y0 = (c - x0) / b;
            }

            if x1 > x_max {
                x1 = x_max;
                y1 = (c - x1) / b;
            } else if x1 < x_min {
                x1 = x_min;
                y1 = (c - x1) / b;
            }
        } else {
            x0 = match v0 {
                Some(v) if v.x > x_min => v.x,
                _ => x_min,
            };
            if x0 > x_max {
                return;
            }
            y0 = c - a * x0;

            x1 = match v1 {
                Some(v) if v.x < x_max => v.x,
                _ => x_max,
            };
            if x1 < x_min {
                return;
            }
            y1 = c - a * x1;

            if (y0 > y_max && y1 > y_max) || (y0 < y_min && y1 < y_min) {
                return;
            }

            if y0 > y_max {
                y0 = y_max;
                x0 = (c - y0) / a;
            } else if y0 < y_min {
                y0 = y_min;
                x0 = (c - y0) / a;
            }

            if y1 > y_max {
                y1 = y_max;
                x1 = (c - y1) / a;
            } else if y1 < y_min {
                y1 = y_min;
                x1 = (c - y1) / a;
            }
        }

        let start = Point2::new(x0, y0);
        let end = Point2::new(x1, y1);
        self.clipped = Some(match v0_side {
            Side::Left => ClippedEnds {
                left: start,
                right: end,
            },
            Side::Right => ClippedEnds {
                left: end,
                right: start,
            },
        });
    }
}

/// Creates the bisector between two sites and registers it with both.
pub(crate) fn create_bisecting_edge<F: Float>(
    sites: &mut SiteList<F>,
    edges: &mut Vec<Edge<F>>,
    left: SiteId,
    right: SiteId,
) -> EdgeId {
    let edge = Edge::bisect(left, sites.coord(left), right, sites.coord(right));
    let id = edges.len();
    edges.push(edge);
    sites.get_mut(left).add_edge(id);
    sites.get_mut(right).add_edge(id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn edge(p: (f64, f64), q: (f64, f64)) -> Edge<f64> {
        Edge::bisect(0, Point2::new(p.0, p.1), 1, Point2::new(q.0, q.1))
    }

    fn bounds() -> Aabb2<f64> {
        Aabb2::from_origin_size(0.0, 0.0, 10.0, 10.0)
    }

    fn on_line(e: &Edge<f64>, p: Point2<f64>) -> bool {
        let (a, b, c) = e.coefficients();
        (a * p.x + b * p.y - c).abs() < 1e-9
    }

    #[test]
    fn test_bisect_normalizes_dominant_axis() {
        // Horizontal neighbours: vertical bisector x = 5
        let e = edge((0.0, 0.0), (10.0, 0.0));
        assert_eq!(e.coefficients(), (1.0, 0.0, 5.0));

        // Vertical neighbours: horizontal bisector y = 5
        let e = edge((0.0, 0.0), (0.0, 10.0));
        assert_eq!(e.coefficients(), (0.0, 1.0, 5.0));

        // Diagonal ties go to the b = 1 branch
        let e = edge((0.0, 0.0), (10.0, 10.0));
        assert_eq!(e.coefficients(), (1.0, 1.0, 10.0));
    }

    #[test]
    fn test_bisect_is_equidistant() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(7.0, 5.0);
        let e = Edge::bisect(0, p, 1, q);
        let (a, b, c) = e.coefficients();
        assert!(a == 1.0 || b == 1.0);

        // Two points on the line, both equidistant from p and q.
        for &x in &[0.0, 3.0, 8.0] {
            let y = (c - a * x) / b;
            let pt = Point2::new(x, y);
            assert_relative_eq!(pt.distance(p), pt.distance(q), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sites_and_neighbor() {
        let e = Edge::bisect(3, Point2::new(0.0_f64, 0.0), 7, Point2::new(1.0, 0.0));
        assert_eq!(e.site(Side::Left), 3);
        assert_eq!(e.site(Side::Right), 7);
        assert_eq!(e.neighbor_of(3), Some(7));
        assert_eq!(e.neighbor_of(7), Some(3));
        assert_eq!(e.neighbor_of(4), None);
        assert_eq!(e.sites_distance(), 1.0);
    }

    #[test]
    fn test_unassigned_vertices_are_hull() {
        let mut e = edge((0.0, 0.0), (10.0, 0.0));
        assert!(e.is_part_of_convex_hull());
        e.set_vertex(Side::Left, Vertex { id: 0, point: Point2::new(5.0, 5.0) });
        assert!(e.is_part_of_convex_hull());
        e.set_vertex(Side::Right, Vertex { id: 1, point: Point2::new(5.0, -5.0) });
        assert!(!e.is_part_of_convex_hull());
    }

    #[test]
    fn test_clip_full_line() {
        let mut e = edge((2.0, 5.0), (8.0, 5.0));
        assert!(e.clipped_ends().is_none());
        e.clip_vertices(bounds());

        let ends = e.clipped_ends().unwrap();
        let mut ys = [ends.left.y, ends.right.y];
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ys, [0.0, 10.0]);
        assert_eq!(ends.left.x, 5.0);
        assert_eq!(ends.right.x, 5.0);
    }

    #[test]
    fn test_clip_ray_keeps_vertex_side() {
        // x = 5, bounded above at (5, 5), running down to infinity.
        let mut e = edge((0.0, 0.0), (10.0, 0.0));
        e.set_vertex(Side::Left, Vertex { id: 0, point: Point2::new(5.0, 5.0) });
        e.clip_vertices(bounds());

        assert_eq!(e.clipped_end(Side::Left), Some(Point2::new(5.0, 5.0)));
        assert_eq!(e.clipped_end(Side::Right), Some(Point2::new(5.0, 0.0)));
    }

    #[test]
    fn test_clip_inside_round_trip() {
        let p = Point2::new(2.0, 3.0);
        let q = Point2::new(6.0, 4.5);
        let mut e = Edge::bisect(0, p, 1, q);
        let (a, b, c) = e.coefficients();
        let y_at = |x: f64| (c - a * x) / b;
        let left = Point2::new(3.0, y_at(3.0));
        let right = Point2::new(5.0, y_at(5.0));
        e.set_vertex(Side::Left, Vertex { id: 0, point: left });
        e.set_vertex(Side::Right, Vertex { id: 1, point: right });

        e.clip_vertices(bounds());
        let ends = e.clipped_ends().unwrap();
        assert_relative_eq!(ends.left.x, left.x, epsilon = 1e-9);
        assert_relative_eq!(ends.left.y, left.y, epsilon = 1e-9);
        assert_relative_eq!(ends.right.x, right.x, epsilon = 1e-9);
        assert_relative_eq!(ends.right.y, right.y, epsilon = 1e-9);
    }

    #[test]
    fn test_clip_clamps_to_sides() {
        // Steep diagonal bisector through the box, both ends unbounded.
        let mut e = edge((0.0, 0.0), (10.0, 4.0));
        e.clip_vertices(bounds());
        let ends = e.clipped_ends().unwrap();
        for p in [ends.left, ends.right] {
            assert!(bounds().contains_point(p));
            assert!(on_line(&e, p));
            assert!(!bounds().boundary_sides(p).is_empty());
        }
    }

    #[test]
    fn test_clip_outside_is_invisible() {
        // Bisector x = 15 lies right of the box.
        let mut e = edge((10.0, 0.0), (20.0, 0.0));
        e.clip_vertices(bounds());
        assert!(!e.is_visible());
        assert!(e.voronoi_segment().is_none());

        // Segment fully below the box.
        let mut e = edge((0.0, 20.0), (10.0, 20.0));
        e.set_vertex(Side::Left, Vertex { id: 0, point: Point2::new(5.0, 12.0) });
        e.set_vertex(Side::Right, Vertex { id: 1, point: Point2::new(5.0, 30.0) });
        e.clip_vertices(bounds());
        assert!(!e.is_visible());
    }

    #[test]
    fn test_delaunay_segment() {
        let e = edge((1.0, 2.0), (3.0, 4.0));
        let s = e.delaunay_segment();
        assert_eq!(s.start, Point2::new(1.0, 2.0));
        assert_eq!(s.end, Point2::new(3.0, 4.0));
    }
}
