//! Fortune's sweep over a sorted site list.

use super::beach_line::BeachLine;
use super::edge::{create_bisecting_edge, Edge, EdgeId, Side, Vertex};
use super::event_queue::EventQueue;
use super::halfedge::{intersection, is_left_of, HalfEdgeId, HalfEdges};
use super::options::VoronoiOptions;
use super::site::{compare_y_then_x, SiteId, SiteList};
use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Edges and vertices produced by one sweep.
#[derive(Debug)]
pub(crate) struct SweepOutput<F> {
    pub edges: Vec<Edge<F>>,
    pub vertices: Vec<Point2<F>>,
}

struct Sweep<'s, F> {
    sites: &'s mut SiteList<F>,
    edges: Vec<Edge<F>>,
    vertices: Vec<Point2<F>>,
    half_edges: HalfEdges<F>,
    beach_line: BeachLine<F>,
    queue: EventQueue<F>,
    bottom_most: SiteId,
    parallel_epsilon: F,
}

/// Runs the sweep and clips every resulting edge to `plot_bounds`.
///
/// Registers each edge with its two sites as it is created.
pub(crate) fn sweep<F: Float>(
    sites: &mut SiteList<F>,
    plot_bounds: Aabb2<F>,
    options: &VoronoiOptions<F>,
) -> SweepOutput<F> {
    let data_bounds = sites.bounds();
    let sqrt_nsites = ((sites.len() + 4) as f64).sqrt() as usize;

    let mut half_edges = HalfEdges::new();
    let beach_line = BeachLine::new(
        &mut half_edges,
        data_bounds.left(),
        data_bounds.width(),
        sqrt_nsites,
    );
    let queue = EventQueue::new(data_bounds.top(), data_bounds.height(), sqrt_nsites);

    let Some(bottom_most) = sites.next() else {
        return SweepOutput {
            edges: Vec::new(),
            vertices: Vec::new(),
        };
    };

    let mut sweep = Sweep {
        sites,
        edges: Vec::new(),
        vertices: Vec::new(),
        half_edges,
        beach_line,
        queue,
        bottom_most,
        parallel_epsilon: options.parallel_epsilon,
    };

    let (site_events, circle_events) = sweep.run();

    let Sweep {
        mut edges,
        vertices,
        half_edges,
        ..
    } = sweep;

    for edge in &mut edges {
        edge.clip_vertices(plot_bounds);
    }

    tracing::debug!(
        site_events,
        circle_events,
        edges = edges.len(),
        vertices = vertices.len(),
        half_edges = half_edges.len(),
        visible = edges.iter().filter(|e| e.is_visible()).count(),
        "sweep finished"
    );

    SweepOutput { edges, vertices }
}

impl<F: Float> Sweep<'_, F> {
    fn run(&mut self) -> (usize, usize) {
        let mut site_events = 1;
        let mut circle_events = 0;
        let mut new_site = self.sites.next();

        loop {
            let next_event = if self.queue.is_empty() {
                None
            } else {
                self.queue.min(&self.half_edges)
            };

            match (new_site, next_event) {
                (Some(site), event)
                    if event.map_or(true, |event| {
                        compare_y_then_x(self.sites.coord(site), event) == Ordering::Less
                    }) =>
                {
                    self.site_event(site);
                    site_events += 1;
                    new_site = self.sites.next();
                }
                (_, Some(_)) => {
                    self.circle_event();
                    circle_events += 1;
                }
                _ => break,
            }
        }

        (site_events, circle_events)
    }

    fn site_event(&mut self, site: SiteId) {
        let p = self.sites.coord(site);
        tracing::trace!(site, x = ?p.x.to_f64(), y = ?p.y.to_f64(), "site event");

        let lbnd = self.left_neighbor(p);
        let rbnd = self.beach_line.right_of(&self.half_edges, lbnd);
        let bottom = self.right_region(lbnd);

        let edge = create_bisecting_edge(self.sites, &mut self.edges, bottom, site);

        let bisector = self.half_edges.alloc(Some(edge), Side::Left);
        self.beach_line.insert(&mut self.half_edges, lbnd, bisector);
        if let Some(vertex) = self.intersect(lbnd, bisector) {
            self.queue.remove(&mut self.half_edges, lbnd);
            self.schedule(lbnd, vertex, p);
        }

        let lbnd = bisector;
        let bisector = self.half_edges.alloc(Some(edge), Side::Right);
        self.beach_line.insert(&mut self.half_edges, lbnd, bisector);
        if let Some(vertex) = self.intersect(bisector, rbnd) {
            self.schedule(bisector, vertex, p);
        }
    }

    fn circle_event(&mut self) {
        let Some(lbnd) = self.queue.extract_min(&mut self.half_edges) else {
            return;
        };
        let Some(point) = self.half_edges[lbnd].vertex else {
            return;
        };

        let llbnd = self.beach_line.left_of(&self.half_edges, lbnd);
        let rbnd = self.beach_line.right_of(&self.half_edges, lbnd);
        let rrbnd = self.beach_line.right_of(&self.half_edges, rbnd);
        let bottom = self.left_region(lbnd);
        let top = self.right_region(rbnd);

        let vertex = Vertex {
            id: self.vertices.len(),
            point,
        };
        self.vertices.push(point);
        tracing::trace!(vertex = vertex.id, x = ?point.x.to_f64(), y = ?point.y.to_f64(), "circle event");

        self.attach_vertex(lbnd, vertex);
        self.attach_vertex(rbnd, vertex);
        self.beach_line.remove(&mut self.half_edges, lbnd);
        self.queue.remove(&mut self.half_edges, rbnd);
        self.beach_line.remove(&mut self.half_edges, rbnd);

        let (bottom, top, side) =
            if self.sites.coord(bottom).y > self.sites.coord(top).y {
                (top, bottom, Side::Right)
            } else {
                (bottom, top, Side::Left)
            };

        let edge = create_bisecting_edge(self.sites, &mut self.edges, bottom, top);
        let bisector = self.half_edges.alloc(Some(edge), side);
        self.beach_line.insert(&mut self.half_edges, llbnd, bisector);
        self.edges[edge].set_vertex(side.other(), vertex);

        let bottom_coord = self.sites.coord(bottom);
        if let Some(next) = self.intersect(llbnd, bisector) {
            self.queue.remove(&mut self.half_edges, llbnd);
            self.schedule(llbnd, next, bottom_coord);
        }
        if let Some(next) = self.intersect(bisector, rrbnd) {
            self.schedule(bisector, next, bottom_coord);
        }
    }

    fn left_neighbor(&mut self, p: Point2<F>) -> HalfEdgeId {
        let Self {
            beach_line,
            half_edges,
            edges,
            ..
        } = self;
        beach_line.left_neighbor(half_edges, p, |he| {
            let node = &half_edges[he];
            node.edge
                .map_or(false, |edge| is_left_of(node.side, &edges[edge], p))
        })
    }

    fn intersect(&self, h0: HalfEdgeId, h1: HalfEdgeId) -> Option<Point2<F>> {
        intersection(&self.half_edges, &self.edges, h0, h1, self.parallel_epsilon)
    }

    /// Queues a circle event for `he` at `vertex`, keyed by the bottom of
    /// the circle through `site`.
    fn schedule(&mut self, he: HalfEdgeId, vertex: Point2<F>, site: Point2<F>) {
        let node = &mut self.half_edges[he];
        node.vertex = Some(vertex);
        node.ystar = vertex.y + site.distance(vertex);
        self.queue.insert(&mut self.half_edges, he);
    }

    fn attach_vertex(&mut self, he: HalfEdgeId, vertex: Vertex<F>) {
        let node = &self.half_edges[he];
        if let Some(edge) = node.edge {
            self.edges[edge].set_vertex(node.side, vertex);
        }
    }

    fn edge_site(&self, edge: Option<EdgeId>, side: Side) -> SiteId {
        edge.map_or(self.bottom_most, |edge| self.edges[edge].site(side))
    }

    /// Site whose arc lies left of `he`.
    fn left_region(&self, he: HalfEdgeId) -> SiteId {
        let node = &self.half_edges[he];
        self.edge_site(node.edge, node.side)
    }

    /// Site whose arc lies right of `he`.
    fn right_region(&self, he: HalfEdgeId) -> SiteId {
        let node = &self.half_edges[he];
        self.edge_site(node.edge, node.side.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voronoi::site::Site;

    fn run(points: &[(f64, f64)], bounds: Aabb2<f64>) -> (SiteList<f64>, SweepOutput<f64>) {
        let mut sites = SiteList::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            sites.push(Site::new(i, Point2::new(x, y), 0.0, 0));
        }
        let output = sweep(&mut sites, bounds, &VoronoiOptions::default());
        (sites, output)
    }

    fn square() -> Aabb2<f64> {
        Aabb2::from_origin_size(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_single_site_has_no_edges() {
        let (sites, output) = run(&[(5.0, 5.0)], square());
        assert!(output.edges.is_empty());
        assert!(output.vertices.is_empty());
        assert!(sites.get(0).unwrap().edges().is_empty());
    }

    #[test]
    fn test_two_sites_one_bisector() {
        let (sites, output) = run(&[(3.0, 5.0), (7.0, 5.0)], square());
        assert_eq!(output.edges.len(), 1);
        let edge = &output.edges[0];
        assert_eq!(edge.coefficients(), (1.0, 0.0, 5.0));
        assert!(edge.vertex(Side::Left).is_none());
        assert!(edge.vertex(Side::Right).is_none());
        assert!(edge.is_visible());
        assert_eq!(sites.get(0).unwrap().edges(), &[0]);
        assert_eq!(sites.get(1).unwrap().edges(), &[0]);
    }

    #[test]
    fn test_triangle_meets_at_circumcenter() {
        let (_, output) = run(&[(2.0, 2.0), (8.0, 2.0), (4.0, 8.0)], square());
        assert_eq!(output.edges.len(), 3);
        assert_eq!(output.vertices.len(), 1);

        // Circumcenter of the triangle.
        let v = output.vertices[0];
        assert!((v.x - 5.0).abs() < 1e-9);
        assert!((v.y - 13.0 / 3.0).abs() < 1e-9);

        for edge in &output.edges {
            let attached = [edge.vertex(Side::Left), edge.vertex(Side::Right)];
            assert_eq!(attached.iter().flatten().count(), 1);
            assert!(edge.is_part_of_convex_hull());
        }
    }

    #[test]
    fn test_square_vertices_coincide() {
        let (_, output) = run(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)], square());
        assert_eq!(output.edges.len(), 5);
        assert_eq!(output.vertices.len(), 2);
        for v in &output.vertices {
            assert!((v.x - 5.0).abs() < 1e-9);
            assert!((v.y - 5.0).abs() < 1e-9);
        }
        let interior = output
            .edges
            .iter()
            .filter(|e| !e.is_part_of_convex_hull())
            .count();
        assert_eq!(interior, 1);
    }

    #[test]
    fn test_collinear_sites_produce_parallel_edges() {
        let (_, output) = run(&[(2.0, 5.0), (5.0, 5.0), (8.0, 5.0)], square());
        assert_eq!(output.edges.len(), 2);
        assert!(output.vertices.is_empty());
        let mut xs: Vec<f64> = output.edges.iter().map(|e| e.coefficients().2).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![3.5, 6.5]);
    }

    #[test]
    fn test_vertical_collinear_sites() {
        let (_, output) = run(&[(5.0, 1.0), (5.0, 4.0), (5.0, 9.0)], square());
        assert_eq!(output.edges.len(), 2);
        assert!(output.vertices.is_empty());
        for edge in &output.edges {
            let (a, b, _) = edge.coefficients();
            assert_eq!((a, b), (0.0, 1.0));
        }
    }
}
