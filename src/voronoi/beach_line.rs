//! The beach line: half-edges ordered left to right, with an x-bucket hash
//! that gives the left-neighbour search a starting point near the query.

use super::bucket_index;
use super::edge::Side;
use super::halfedge::{HalfEdgeId, HalfEdges};
use crate::primitives::Point2;
use num_traits::Float;

#[derive(Debug)]
pub(crate) struct BeachLine<F> {
    /// Cached half-edge per x-bucket. Entries may go stale; lookups drop
    /// removed ones lazily.
    hash: Vec<Option<HalfEdgeId>>,
    left_end: HalfEdgeId,
    right_end: HalfEdgeId,
    x_min: F,
    delta_x: F,
}

impl<F: Float> BeachLine<F> {
    /// Creates an empty beach line holding only the two sentinels.
    ///
    /// `x_min` and `delta_x` describe the x-extent of the sites; the hash
    /// has `2 * sqrt_nsites` buckets.
    pub fn new(half_edges: &mut HalfEdges<F>, x_min: F, delta_x: F, sqrt_nsites: usize) -> Self {
        let size = (2 * sqrt_nsites).max(2);
        let left_end = half_edges.alloc(None, Side::Left);
        let right_end = half_edges.alloc(None, Side::Left);
        half_edges[left_end].right = Some(right_end);
        half_edges[right_end].left = Some(left_end);

        let mut hash = vec![None; size];
        hash[0] = Some(left_end);
        hash[size - 1] = Some(right_end);

        Self {
            hash,
            left_end,
            right_end,
            x_min,
            delta_x,
        }
    }

    /// Right neighbour of `he`, falling back to the right sentinel.
    #[inline]
    pub fn right_of(&self, half_edges: &HalfEdges<F>, he: HalfEdgeId) -> HalfEdgeId {
        half_edges[he].right.unwrap_or(self.right_end)
    }

    /// Left neighbour of `he`, falling back to the left sentinel.
    #[inline]
    pub fn left_of(&self, half_edges: &HalfEdges<F>, he: HalfEdgeId) -> HalfEdgeId {
        half_edges[he].left.unwrap_or(self.left_end)
    }

    /// Links `new` immediately right of `lb`.
    pub fn insert(&mut self, half_edges: &mut HalfEdges<F>, lb: HalfEdgeId, new: HalfEdgeId) {
        let next = half_edges[lb].right;
        half_edges[new].left = Some(lb);
        half_edges[new].right = next;
        if let Some(next) = next {
            half_edges[next].left = Some(new);
        }
        half_edges[lb].right = Some(new);
    }

    /// Unlinks `he` and marks it removed. The bisector keeps its edge, so
    /// an already computed intersection stays valid.
    pub fn remove(&mut self, half_edges: &mut HalfEdges<F>, he: HalfEdgeId) {
        let (left, right) = (half_edges[he].left, half_edges[he].right);
        if let Some(left) = left {
            half_edges[left].right = right;
        }
        if let Some(right) = right {
            half_edges[right].left = left;
        }
        let node = &mut half_edges[he];
        node.removed = true;
        node.left = None;
        node.right = None;
    }

    /// Finds the half-edge immediately left of `p`.
    ///
    /// `is_left_of(he)` must report whether a (non-sentinel) half-edge lies
    /// left of `p`. The search starts from the nearest live hash entry,
    /// probing `b-1, b+1, b-2, b+2, ...`, then walks the list.
    pub fn left_neighbor(
        &mut self,
        half_edges: &HalfEdges<F>,
        p: Point2<F>,
        mut is_left_of: impl FnMut(HalfEdgeId) -> bool,
    ) -> HalfEdgeId {
        let size = self.hash.len();
        let bucket = bucket_index(p.x - self.x_min, self.delta_x, size);

        let mut start = self.cached(half_edges, bucket as isize);
        let mut offset = 1;
        while start.is_none() && offset < size as isize {
            start = self
                .cached(half_edges, bucket as isize - offset)
                .or_else(|| self.cached(half_edges, bucket as isize + offset));
            offset += 1;
        }
        let mut he = start.unwrap_or(self.left_end);

        if he == self.left_end || (he != self.right_end && is_left_of(he)) {
            loop {
                he = self.right_of(half_edges, he);
                if he == self.right_end || !is_left_of(he) {
                    break;
                }
            }
            he = self.left_of(half_edges, he);
        } else {
            loop {
                he = self.left_of(half_edges, he);
                if he == self.left_end || is_left_of(he) {
                    break;
                }
            }
        }

        // Sentinel buckets stay pinned.
        if bucket > 0 && bucket < size - 1 {
            self.hash[bucket] = Some(he);
        }
        he
    }

    /// Live hash entry for `bucket`, clearing it if it has been removed.
    fn cached(&mut self, half_edges: &HalfEdges<F>, bucket: isize) -> Option<HalfEdgeId> {
        if bucket < 0 || bucket as usize >= self.hash.len() {
            return None;
        }
        let slot = &mut self.hash[bucket as usize];
        match *slot {
            Some(he) if half_edges[he].removed => {
                *slot = None;
                None
            }
            entry => entry,
        }
    }
}
