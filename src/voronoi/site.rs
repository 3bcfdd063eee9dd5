//! Input sites and the sweep-ordered site registry.

use super::edge::EdgeId;
use crate::bounds::Aabb2;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Index of a site in the caller's input list.
pub type SiteId = usize;

/// An input point anchoring one Voronoi cell.
#[derive(Debug)]
pub struct Site<F> {
    id: SiteId,
    coord: Point2<F>,
    weight: F,
    color: u32,
    /// Incident edges in discovery order.
    edges: Vec<EdgeId>,
    region: OnceLock<Polygon<F>>,
}

impl<F: Float> Site<F> {
    pub(crate) fn new(id: SiteId, coord: Point2<F>, weight: F, color: u32) -> Self {
        Self {
            id,
            coord,
            weight,
            color,
            edges: Vec::new(),
            region: OnceLock::new(),
        }
    }

    /// Position of this site in the input list.
    #[inline]
    pub fn id(&self) -> SiteId {
        self.id
    }

    /// Site coordinate.
    #[inline]
    pub fn coord(&self) -> Point2<F> {
        self.coord
    }

    /// Weight carried for the caller. No predicate reads it.
    #[inline]
    pub fn weight(&self) -> F {
        self.weight
    }

    /// Caller-supplied tag, 0 when none was given.
    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Incident edges, in the order the sweep discovered them.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn region_cell(&self) -> &OnceLock<Polygon<F>> {
        &self.region
    }
}

/// Sweep order: ascending `y`, ties broken by ascending `x`.
#[inline]
pub(crate) fn compare_y_then_x<F: Float>(a: Point2<F>, b: Point2<F>) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Owns every site and hands them out in sweep order.
#[derive(Debug)]
pub(crate) struct SiteList<F> {
    sites: Vec<Site<F>>,
    /// Site ids sorted by [`compare_y_then_x`]; valid once `sorted` is set.
    order: Vec<SiteId>,
    cursor: usize,
    sorted: bool,
}

impl<F: Float> SiteList<F> {
    pub fn new() -> Self {
        Self {
            sites: Vec::new(),
            order: Vec::new(),
            cursor: 0,
            sorted: false,
        }
    }

    /// Appends a site. Its id must equal its input position.
    pub fn push(&mut self, site: Site<F>) -> SiteId {
        debug_assert_eq!(site.id, self.sites.len());
        self.sorted = false;
        self.sites.push(site);
        self.sites.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn get(&self, id: SiteId) -> Option<&Site<F>> {
        self.sites.get(id)
    }

    #[inline]
    pub fn coord(&self, id: SiteId) -> Point2<F> {
        self.sites[id].coord
    }

    #[inline]
    pub fn get_mut(&mut self, id: SiteId) -> &mut Site<F> {
        &mut self.sites[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site<F>> {
        self.sites.iter()
    }

    /// Sorts into sweep order and rewinds the cursor.
    pub fn sort(&mut self) {
        let sites = &self.sites;
        let mut order: Vec<SiteId> = (0..sites.len()).collect();
        // Stable, so exact duplicates keep input order.
        order.sort_by(|&a, &b| compare_y_then_x(sites[a].coord, sites[b].coord));
        self.order = order;
        self.cursor = 0;
        self.sorted = true;
    }

    /// Returns the next site in sweep order, `None` past the end.
    ///
    /// # Panics
    ///
    /// Panics if the list has not been sorted since the last insertion.
    pub fn next(&mut self) -> Option<SiteId> {
        assert!(self.sorted, "SiteList::next: sites have not been sorted");
        let id = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(id)
    }

    /// Spatial extent of the sites, sorting first if needed.
    ///
    /// The y-range comes from the first and last sites in sweep order; x is
    /// not sorted globally, so its range needs a full scan.
    pub fn bounds(&mut self) -> Aabb2<F> {
        if !self.sorted {
            self.sort();
        }
        let (first, last) = match (self.order.first(), self.order.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Aabb2::from_point(Point2::origin()),
        };

        let mut x_min = F::infinity();
        let mut x_max = F::neg_infinity();
        for site in &self.sites {
            x_min = x_min.min(site.coord.x);
            x_max = x_max.max(site.coord.x);
        }

        Aabb2::new(
            Point2::new(x_min, self.sites[first].coord.y),
            Point2::new(x_max, self.sites[last].coord.y),
        )
    }

    /// Finds a pair of sites with identical coordinates, as `(earlier, later)`
    /// input positions.
    pub fn find_duplicate(&mut self) -> Option<(SiteId, SiteId)> {
        if !self.sorted {
            self.sort();
        }
        self.order.windows(2).find_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            if self.sites[a].coord == self.sites[b].coord {
                Some((a.min(b), a.max(b)))
            } else {
                None
            }
        })
    }

    /// Looks up the site at exactly `coord` by binary search over sweep order.
    pub fn find(&self, coord: Point2<F>) -> Option<SiteId> {
        if !self.sorted {
            return self.sites.iter().position(|s| s.coord == coord);
        }
        self.order
            .binary_search_by(|&id| compare_y_then_x(self.sites[id].coord, coord))
            .ok()
            .map(|pos| self.order[pos])
    }
}
