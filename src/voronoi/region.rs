//! Builds the clipped polygon of one Voronoi cell.
//!
//! The visible parts of a site's edges are stitched into an outline. Where
//! consecutive pieces end on the plot boundary, the rectangle corners
//! between them are inserted, walking the boundary in the same rotational
//! sense as the outline itself.

use super::edge::Edge;
use super::reorder::{reorder_edges, ReorderCriterion};
use super::site::{Site, SiteList};
use crate::bounds::{Aabb2, BoundarySides};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Rectangle sides in screen-clockwise order. `Aabb2::corners()` uses the
/// same order, so corner `k` sits just before side `k`.
const SIDES: [BoundarySides; 4] = [
    BoundarySides::TOP,
    BoundarySides::RIGHT,
    BoundarySides::BOTTOM,
    BoundarySides::LEFT,
];

/// Direction of travel along the rectangle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// Top, right, bottom, left (clockwise on screen).
    Forward,
    Backward,
}

/// Returns the cell of `site` clipped to `bounds`, counter-clockwise.
pub(crate) fn build_region<F: Float>(
    site: &Site<F>,
    edges: &[Edge<F>],
    sites: &SiteList<F>,
    bounds: Aabb2<F>,
    close_enough: F,
) -> Polygon<F> {
    let segments = oriented_segments(site, edges);
    if segments.is_empty() {
        return whole_or_nothing(site, edges, sites, bounds);
    }

    let coord = site.coord();
    let rotation = segments
        .iter()
        .fold(F::zero(), |acc, &(a, b)| acc + (a - coord).cross(b - coord));
    let walk = if rotation > F::zero() {
        Some(Walk::Forward)
    } else if rotation < F::zero() {
        Some(Walk::Backward)
    } else {
        None
    };

    let close = |a: Point2<F>, b: Point2<F>| a.distance(b) < close_enough;
    let mut points: Vec<Point2<F>> = Vec::with_capacity(segments.len() * 2 + 4);

    for (start, end) in segments {
        match points.last().copied() {
            None => points.push(start),
            Some(last) if !close(last, start) => {
                for corner in corners_between(last, start, bounds, walk) {
                    push_distinct(&mut points, corner, close_enough);
                }
                push_distinct(&mut points, start, close_enough);
            }
            Some(_) => {}
        }
        push_distinct(&mut points, end, close_enough);
    }

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if points.len() > 1 && !close(last, first) {
            for corner in corners_between(last, first, bounds, walk) {
                push_distinct(&mut points, corner, close_enough);
            }
        }
    }
    if points.len() > 1 && close(points[0], points[points.len() - 1]) {
        points.pop();
    }

    let mut polygon = Polygon::new(points);
    polygon.ensure_ccw();
    polygon
}

/// Visible edge pieces of `site`, each as `(start, end)` in walk order.
///
/// Bounded cells chain through shared vertices. Otherwise the pieces are
/// sorted by the angle of their midpoints around the site and each is
/// turned to run clockwise on screen.
fn oriented_segments<F: Float>(site: &Site<F>, edges: &[Edge<F>]) -> Vec<(Point2<F>, Point2<F>)> {
    if let Some(chain) = reorder_edges(edges, site.edges(), ReorderCriterion::Vertex) {
        return chain
            .into_iter()
            .filter_map(|oriented| {
                let ends = edges[oriented.edge].clipped_ends()?;
                Some((ends.get(oriented.entry()), ends.get(oriented.exit())))
            })
            .collect();
    }

    let coord = site.coord();
    let mut pieces: Vec<(F, Point2<F>, Point2<F>)> = site
        .edges()
        .iter()
        .filter_map(|&id| {
            let ends = edges[id].clipped_ends()?;
            let (mut start, mut end) = (ends.left, ends.right);
            if (start - coord).cross(end - coord) < F::zero() {
                std::mem::swap(&mut start, &mut end);
            }
            let angle = (start.midpoint(end) - coord).angle();
            Some((angle, start, end))
        })
        .collect();
    pieces.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    pieces.into_iter().map(|(_, start, end)| (start, end)).collect()
}

/// A site with no visible edges owns either all of `bounds` or none of it.
fn whole_or_nothing<F: Float>(
    site: &Site<F>,
    edges: &[Edge<F>],
    sites: &SiteList<F>,
    bounds: Aabb2<F>,
) -> Polygon<F> {
    let center = bounds.center();
    let own = center.distance_squared(site.coord());
    let nearest = site
        .edges()
        .iter()
        .filter_map(|&id| edges[id].neighbor_of(site.id()))
        .all(|other| own <= center.distance_squared(sites.coord(other)));

    if !nearest {
        return Polygon::empty();
    }
    let mut polygon = Polygon::new(bounds.corners().to_vec());
    polygon.ensure_ccw();
    polygon
}

fn push_distinct<F: Float>(points: &mut Vec<Point2<F>>, p: Point2<F>, close_enough: F) {
    match points.last() {
        Some(&last) if last.distance(p) < close_enough => {}
        _ => points.push(p),
    }
}

fn side_index(sides: BoundarySides) -> Option<usize> {
    SIDES.iter().position(|&side| sides.contains(side))
}

/// Rectangle corners passed when walking the boundary from `from` to `to`.
///
/// Empty unless both points lie on the boundary on different sides. With
/// no known direction the shorter way round wins.
fn corners_between<F: Float>(
    from: Point2<F>,
    to: Point2<F>,
    bounds: Aabb2<F>,
    walk: Option<Walk>,
) -> Vec<Point2<F>> {
    let (from_sides, to_sides) = (bounds.boundary_sides(from), bounds.boundary_sides(to));
    if from_sides.intersects(to_sides) {
        return Vec::new();
    }
    let (Some(from_side), Some(to_side)) = (side_index(from_sides), side_index(to_sides)) else {
        return Vec::new();
    };

    let corners = bounds.corners();
    let collect = |walk: Walk| {
        let mut out = Vec::with_capacity(3);
        let mut side = from_side;
        while side != to_side {
            match walk {
                Walk::Forward => {
                    side = (side + 1) % 4;
                    out.push(corners[side]);
                }
                Walk::Backward => {
                    out.push(corners[side]);
                    side = (side + 3) % 4;
                }
            }
        }
        out
    };

    match walk {
        Some(walk) => collect(walk),
        None => {
            let forward = collect(Walk::Forward);
            let backward = collect(Walk::Backward);
            if path_length(from, &forward, to) <= path_length(from, &backward, to) {
                forward
            } else {
                backward
            }
        }
    }
}

fn path_length<F: Float>(from: Point2<F>, via: &[Point2<F>], to: Point2<F>) -> F {
    let mut length = F::zero();
    let mut at = from;
    for &p in via.iter().chain(std::iter::once(&to)) {
        length = length + at.distance(p);
        at = p;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voronoi::options::VoronoiOptions;
    use crate::voronoi::sweep::sweep;
    use approx::assert_relative_eq;

    fn bounds() -> Aabb2<f64> {
        Aabb2::from_origin_size(0.0, 0.0, 10.0, 10.0)
    }

    fn regions(points: &[(f64, f64)], bounds: Aabb2<f64>) -> Vec<Polygon<f64>> {
        let mut sites = SiteList::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            sites.push(Site::new(i, Point2::new(x, y), 0.0, 0));
        }
        let output = sweep(&mut sites, bounds, &VoronoiOptions::default());
        (0..points.len())
            .map(|id| {
                let site = sites.get(id).unwrap();
                build_region(site, &output.edges, &sites, bounds, 0.005)
            })
            .collect()
    }

    #[test]
    fn test_single_site_owns_bounds() {
        let cells = regions(&[(3.0, 4.0)], bounds());
        assert_eq!(cells[0].len(), 4);
        assert_relative_eq!(cells[0].signed_area(), 100.0);
    }

    #[test]
    fn test_two_sites_split_bounds() {
        let cells = regions(&[(3.0, 5.0), (7.0, 5.0)], bounds());
        assert_relative_eq!(cells[0].area(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(cells[1].area(), 50.0, epsilon = 1e-9);
        assert!(cells[0].contains(Point2::new(1.0, 1.0)));
        assert!(cells[1].contains(Point2::new(9.0, 9.0)));
    }

    #[test]
    fn test_square_quadrants() {
        let cells = regions(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)], bounds());
        for cell in &cells {
            assert_relative_eq!(cell.signed_area(), 25.0, epsilon = 1e-9);
            assert!(cell.is_convex());
        }
        assert!(cells[0].contains(Point2::new(2.0, 2.0)));
        assert!(cells[3].contains(Point2::new(8.0, 8.0)));
    }

    #[test]
    fn test_collinear_strips() {
        let cells = regions(&[(2.0, 5.0), (5.0, 5.0), (8.0, 5.0)], bounds());
        assert_relative_eq!(cells[0].area(), 35.0, epsilon = 1e-9);
        assert_relative_eq!(cells[1].area(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(cells[2].area(), 35.0, epsilon = 1e-9);
    }

    #[test]
    fn test_site_outside_bounds_with_invisible_edges() {
        // Bisector x = 25 misses the box entirely.
        let cells = regions(&[(5.0, 5.0), (45.0, 5.0)], bounds());
        assert_relative_eq!(cells[0].area(), 100.0);
        assert!(cells[1].is_empty());
    }

    #[test]
    fn test_corners_between_walks() {
        let b = bounds();
        let top = Point2::new(4.0, 0.0);
        let left = Point2::new(0.0, 6.0);
        assert_eq!(
            corners_between(top, left, b, Some(Walk::Backward)),
            vec![Point2::new(0.0, 0.0)]
        );
        assert_eq!(
            corners_between(top, left, b, Some(Walk::Forward)),
            vec![
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ]
        );
        // Shorter way when the direction is unknown.
        assert_eq!(corners_between(top, left, b, None), vec![Point2::new(0.0, 0.0)]);
        // Same side or interior points need no corners.
        assert!(corners_between(top, Point2::new(8.0, 0.0), b, None).is_empty());
        assert!(corners_between(top, Point2::new(5.0, 5.0), b, None).is_empty());
    }
}
