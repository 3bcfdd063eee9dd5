//! The finished diagram and its read-only queries.

use super::edge::{Edge, EdgeId, Side};
use super::options::VoronoiOptions;
use super::region::build_region;
use super::reorder::{reorder_edges, ReorderCriterion};
use super::site::{Site, SiteId, SiteList};
use super::sweep::sweep;
use crate::bounds::Aabb2;
use crate::error::VoronoiError;
use crate::polygon::Polygon;
use crate::primitives::{Circle2, Point2, Segment2};
use crate::spanning::{kruskal, Link, SpanningTreeMode};
use num_traits::Float;
use std::cmp::Ordering;

/// A Voronoi diagram clipped to a plot rectangle, with its Delaunay dual.
///
/// Built once; every query is read-only. Site ids are input positions.
/// Regions are computed on first request and cached.
#[derive(Debug)]
pub struct Voronoi<F> {
    plot_bounds: Aabb2<F>,
    options: VoronoiOptions<F>,
    sites: SiteList<F>,
    edges: Vec<Edge<F>>,
    vertices: Vec<Point2<F>>,
}

/// Collects inputs for [`Voronoi`].
///
/// Per-site lists shorter than the point list default the missing entries
/// to zero.
#[derive(Debug, Clone)]
pub struct VoronoiBuilder<F> {
    points: Vec<Point2<F>>,
    colors: Vec<u32>,
    weights: Vec<F>,
    plot_bounds: Aabb2<F>,
    options: VoronoiOptions<F>,
}

impl<F: Float> VoronoiBuilder<F> {
    pub fn new(points: &[Point2<F>], plot_bounds: Aabb2<F>) -> Self {
        Self {
            points: points.to_vec(),
            colors: Vec::new(),
            weights: Vec::new(),
            plot_bounds,
            options: VoronoiOptions::default(),
        }
    }

    /// Per-site colour tags.
    pub fn colors(mut self, colors: &[u32]) -> Self {
        self.colors = colors.to_vec();
        self
    }

    /// Per-site weights. Stored for the caller; construction ignores them.
    pub fn weights(mut self, weights: &[F]) -> Self {
        self.weights = weights.to_vec();
        self
    }

    pub fn options(mut self, options: VoronoiOptions<F>) -> Self {
        self.options = options;
        self
    }

    /// Validates the input and runs the sweep.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite bounds, coordinates or weights, and
    /// for two sites at exactly the same coordinate.
    pub fn build(self) -> Result<Voronoi<F>, VoronoiError> {
        if !self.plot_bounds.is_valid() {
            return Err(VoronoiError::InvalidBounds);
        }

        let mut sites = SiteList::new();
        for (index, &coord) in self.points.iter().enumerate() {
            if !coord.is_finite() {
                return Err(VoronoiError::NonFiniteSite { index });
            }
            let weight = self.weights.get(index).copied().unwrap_or_else(F::zero);
            if !weight.is_finite() {
                return Err(VoronoiError::NonFiniteWeight { index });
            }
            let color = self.colors.get(index).copied().unwrap_or(0);
            sites.push(Site::new(index, coord, weight, color));
        }

        if let Some((first, duplicate)) = sites.find_duplicate() {
            return Err(VoronoiError::DuplicateSite { first, duplicate });
        }

        let output = sweep(&mut sites, self.plot_bounds, &self.options);
        Ok(Voronoi {
            plot_bounds: self.plot_bounds,
            options: self.options,
            sites,
            edges: output.edges,
            vertices: output.vertices,
        })
    }
}

impl<F: Float> Voronoi<F> {
    /// Builds the diagram of `points` clipped to `plot_bounds`, with default
    /// options. `colors` may be shorter than `points`.
    ///
    /// # Errors
    ///
    /// See [`VoronoiBuilder::build`].
    pub fn new(
        points: &[Point2<F>],
        colors: &[u32],
        plot_bounds: Aabb2<F>,
    ) -> Result<Self, VoronoiError> {
        VoronoiBuilder::new(points, plot_bounds).colors(colors).build()
    }

    /// Starts a builder for weights or non-default options.
    pub fn builder(points: &[Point2<F>], plot_bounds: Aabb2<F>) -> VoronoiBuilder<F> {
        VoronoiBuilder::new(points, plot_bounds)
    }

    #[inline]
    pub fn plot_bounds(&self) -> Aabb2<F> {
        self.plot_bounds
    }

    #[inline]
    pub fn options(&self) -> &VoronoiOptions<F> {
        &self.options
    }

    /// Every edge, visible or not, in creation order.
    #[inline]
    pub fn edges(&self) -> &[Edge<F>] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<F>> {
        self.edges.get(id)
    }

    /// Resolved Voronoi vertices, indexed by [`Vertex::id`](super::Vertex).
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Number of sites.
    #[inline]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Sites in input order.
    pub fn sites(&self) -> impl Iterator<Item = &Site<F>> {
        self.sites.iter()
    }

    #[inline]
    pub fn site(&self, id: SiteId) -> Option<&Site<F>> {
        self.sites.get(id)
    }

    /// Id of the site at exactly `coord`.
    pub fn site_at(&self, coord: Point2<F>) -> Option<SiteId> {
        self.sites.find(coord)
    }

    /// Site coordinates in input order.
    pub fn site_coords(&self) -> Vec<Point2<F>> {
        self.sites.iter().map(Site::coord).collect()
    }

    /// Clipped cell of site `id`, counter-clockwise.
    pub fn region(&self, id: SiteId) -> Option<&Polygon<F>> {
        let site = self.sites.get(id)?;
        Some(site.region_cell().get_or_init(|| {
            build_region(
                site,
                &self.edges,
                &self.sites,
                self.plot_bounds,
                self.options.close_enough,
            )
        }))
    }

    /// Every clipped cell, in site order.
    pub fn regions(&self) -> Vec<&Polygon<F>> {
        (0..self.sites.len()).filter_map(|id| self.region(id)).collect()
    }

    /// Sites sharing an edge with `id`, in edge discovery order.
    pub fn neighbor_sites(&self, id: SiteId) -> Vec<SiteId> {
        self.sites.get(id).map_or_else(Vec::new, |site| {
            site.edges()
                .iter()
                .filter_map(|&edge| self.edges[edge].neighbor_of(id))
                .collect()
        })
    }

    /// One circle per site, centred on it with radius half the distance to
    /// its nearest neighbour. The radius is 0 when that nearest edge is a
    /// hull edge or the site has no edges.
    pub fn circles(&self) -> Vec<Circle2<F>> {
        let two = F::one() + F::one();
        self.sites
            .iter()
            .map(|site| {
                let nearest = site
                    .edges()
                    .iter()
                    .map(|&id| &self.edges[id])
                    .min_by(|a, b| {
                        a.sites_distance()
                            .partial_cmp(&b.sites_distance())
                            .unwrap_or(Ordering::Equal)
                    });
                let radius = match nearest {
                    Some(edge) if !edge.is_part_of_convex_hull() => edge.sites_distance() / two,
                    _ => F::zero(),
                };
                Circle2::new(site.coord(), radius)
            })
            .collect()
    }

    fn site_edges(&self, id: SiteId) -> impl Iterator<Item = &Edge<F>> {
        self.sites
            .get(id)
            .map(Site::edges)
            .unwrap_or_default()
            .iter()
            .map(|&edge| &self.edges[edge])
    }

    /// Visible edge segments around site `id`.
    pub fn voronoi_boundary_for_site(&self, id: SiteId) -> Vec<Segment2<F>> {
        self.site_edges(id).filter_map(Edge::voronoi_segment).collect()
    }

    /// Delaunay links from site `id` to each of its neighbours.
    pub fn delaunay_lines_for_site(&self, id: SiteId) -> Vec<Segment2<F>> {
        self.site_edges(id).map(Edge::delaunay_segment).collect()
    }

    /// Every visible Voronoi edge segment.
    pub fn voronoi_segments(&self) -> Vec<Segment2<F>> {
        self.edges.iter().filter_map(Edge::voronoi_segment).collect()
    }

    /// Every Delaunay link, one per edge.
    pub fn delaunay_triangulation(&self) -> Vec<Segment2<F>> {
        self.edges.iter().map(Edge::delaunay_segment).collect()
    }

    fn hull_edges(&self) -> Vec<EdgeId> {
        (0..self.edges.len())
            .filter(|&id| self.edges[id].is_part_of_convex_hull())
            .collect()
    }

    /// Delaunay links along the convex hull, unordered.
    pub fn hull(&self) -> Vec<Segment2<F>> {
        self.hull_edges()
            .into_iter()
            .map(|id| self.edges[id].delaunay_segment())
            .collect()
    }

    /// Hull sites in boundary order.
    ///
    /// Empty when there are no hull edges, or when they do not chain.
    pub fn hull_points_in_order(&self) -> Vec<Point2<F>> {
        let hull = self.hull_edges();
        reorder_edges(&self.edges, &hull, ReorderCriterion::Site)
            .unwrap_or_default()
            .into_iter()
            .map(|oriented| {
                let edge = &self.edges[oriented.edge];
                edge.site_coord(oriented.entry())
            })
            .collect()
    }

    /// Minimum or maximum spanning tree of the Delaunay links, weighted by
    /// length.
    pub fn spanning_tree(&self, mode: SpanningTreeMode) -> Vec<Segment2<F>> {
        let links: Vec<Link<F>> = self
            .edges
            .iter()
            .map(|edge| {
                Link::new(
                    edge.site(Side::Left),
                    edge.site(Side::Right),
                    edge.sites_distance(),
                )
            })
            .collect();
        kruskal(self.sites.len(), &links, mode)
            .into_iter()
            .map(|i| self.edges[i].delaunay_segment())
            .collect()
    }
}
