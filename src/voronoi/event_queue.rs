//! Bucketed priority queue of pending circle events.
//!
//! Each bucket covers a slice of the y-range and holds a chain of
//! half-edges sorted by `(ystar, vertex.x)`. The minimum is found by
//! advancing `min_bucket` past empty buckets.

use super::bucket_index;
use super::halfedge::{HalfEdgeId, HalfEdges};
use crate::primitives::Point2;
use num_traits::Float;

#[derive(Debug)]
pub(crate) struct EventQueue<F> {
    heads: Vec<Option<HalfEdgeId>>,
    count: usize,
    min_bucket: usize,
    y_min: F,
    delta_y: F,
}

impl<F: Float> EventQueue<F> {
    /// Creates an empty queue with `4 * sqrt_nsites` buckets over the
    /// y-range `[y_min, y_min + delta_y]`.
    pub fn new(y_min: F, delta_y: F, sqrt_nsites: usize) -> Self {
        Self {
            heads: vec![None; (4 * sqrt_nsites).max(1)],
            count: 0,
            min_bucket: 0,
            y_min,
            delta_y,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn bucket(&self, ystar: F) -> usize {
        bucket_index(ystar - self.y_min, self.delta_y, self.heads.len())
    }

    /// Queues `he`, whose `vertex` and `ystar` must already be set.
    ///
    /// A new event goes before existing events with an equal key.
    pub fn insert(&mut self, half_edges: &mut HalfEdges<F>, he: HalfEdgeId) {
        let key = event_key(half_edges, he);
        let bucket = self.bucket(key.y);
        self.min_bucket = self.min_bucket.min(bucket);

        let mut prev: Option<HalfEdgeId> = None;
        let mut next = self.heads[bucket];
        while let Some(current) = next {
            let other = event_key(half_edges, current);
            if key.y > other.y || (key.y == other.y && key.x > other.x) {
                prev = Some(current);
                next = half_edges[current].next_in_queue;
            } else {
                break;
            }
        }

        half_edges[he].next_in_queue = next;
        match prev {
            Some(prev) => half_edges[prev].next_in_queue = Some(he),
            None => self.heads[bucket] = Some(he),
        }
        self.count += 1;
    }

    /// Cancels the pending event of `he`, if any, and clears its vertex.
    pub fn remove(&mut self, half_edges: &mut HalfEdges<F>, he: HalfEdgeId) {
        if half_edges[he].vertex.is_none() {
            return;
        }
        let bucket = self.bucket(half_edges[he].ystar);

        let mut prev: Option<HalfEdgeId> = None;
        let mut current = self.heads[bucket];
        while let Some(node) = current {
            if node == he {
                let after = half_edges[he].next_in_queue;
                match prev {
                    Some(prev) => half_edges[prev].next_in_queue = after,
                    None => self.heads[bucket] = after,
                }
                self.count -= 1;
                break;
            }
            prev = current;
            current = half_edges[node].next_in_queue;
        }

        let node = &mut half_edges[he];
        node.vertex = None;
        node.next_in_queue = None;
    }

    fn adjust_min_bucket(&mut self) {
        while self.min_bucket < self.heads.len() - 1 && self.heads[self.min_bucket].is_none() {
            self.min_bucket += 1;
        }
    }

    /// Coordinates `(vertex.x, ystar)` of the earliest event.
    pub fn min(&mut self, half_edges: &HalfEdges<F>) -> Option<Point2<F>> {
        self.adjust_min_bucket();
        let head = self.heads[self.min_bucket]?;
        Some(event_key(half_edges, head))
    }

    /// Pops the earliest event. Its `vertex` stays set for the caller.
    pub fn extract_min(&mut self, half_edges: &mut HalfEdges<F>) -> Option<HalfEdgeId> {
        self.adjust_min_bucket();
        let head = self.heads[self.min_bucket]?;
        self.heads[self.min_bucket] = half_edges[head].next_in_queue;
        half_edges[head].next_in_queue = None;
        self.count -= 1;
        Some(head)
    }
}

#[inline]
fn event_key<F: Float>(half_edges: &HalfEdges<F>, he: HalfEdgeId) -> Point2<F> {
    let node = &half_edges[he];
    let x = node.vertex.map_or(F::zero(), |v| v.x);
    Point2::new(x, node.ystar)
}
