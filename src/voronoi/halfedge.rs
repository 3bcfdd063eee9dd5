//! Beach-line half-edges and the predicates the sweep runs on them.
//!
//! Half-edges live in an arena and link to each other by index: a node
//! sits on the beach line (`left`/`right`) and, while it carries a
//! pending circle event, on one event-queue chain (`next_in_queue`).

use super::edge::{Edge, EdgeId, Side};
use super::site::compare_y_then_x;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

pub(crate) type HalfEdgeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct HalfEdge<F> {
    /// `None` only for the two beach-line sentinels.
    pub edge: Option<EdgeId>,
    pub side: Side,
    pub left: Option<HalfEdgeId>,
    pub right: Option<HalfEdgeId>,
    pub next_in_queue: Option<HalfEdgeId>,
    /// Pending circle-event vertex; `Some` exactly while queued.
    pub vertex: Option<Point2<F>>,
    /// Event key: `vertex.y` plus the circle radius.
    pub ystar: F,
    /// Set once unlinked from the beach line; stale hash entries check it.
    pub removed: bool,
}

#[derive(Debug, Default)]
pub(crate) struct HalfEdges<F> {
    nodes: Vec<HalfEdge<F>>,
}

impl<F: Float> HalfEdges<F> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn alloc(&mut self, edge: Option<EdgeId>, side: Side) -> HalfEdgeId {
        self.nodes.push(HalfEdge {
            edge,
            side,
            left: None,
            right: None,
            next_in_queue: None,
            vertex: None,
            ystar: F::zero(),
            removed: false,
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<F> Index<HalfEdgeId> for HalfEdges<F> {
    type Output = HalfEdge<F>;

    #[inline]
    fn index(&self, id: HalfEdgeId) -> &HalfEdge<F> {
        &self.nodes[id]
    }
}

impl<F> IndexMut<HalfEdgeId> for HalfEdges<F> {
    #[inline]
    fn index_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge<F> {
        &mut self.nodes[id]
    }
}

/// Returns `true` when the half-edge `(side, edge)` lies left of `p`, i.e.
/// `p` is on its right.
///
/// The quick sign tests settle most queries; the final comparison resolves
/// the parabola-arc case exactly.
pub(crate) fn is_left_of<F: Float>(side: Side, edge: &Edge<F>, p: Point2<F>) -> bool {
    let one = F::one();
    let top = edge.site_coord(Side::Right);
    let right_of_site = p.x > top.x;

    if right_of_site && side == Side::Left {
        return true;
    }
    if !right_of_site && side == Side::Right {
        return false;
    }

    let (a, b, c) = edge.coefficients();
    let above = if a == one {
        let dyp = p.y - top.y;
        let dxp = p.x - top.x;
        let mut fast = false;
        let mut above;

        if (!right_of_site && b < F::zero()) || (right_of_site && b >= F::zero()) {
            above = dyp >= b * dxp;
            fast = above;
        } else {
            above = p.x + p.y * b > c;
            if b < F::zero() {
                above = !above;
            }
            if !above {
                fast = true;
            }
        }

        if !fast {
            let dxs = top.x - edge.site_coord(Side::Left).x;
            let two = one + one;
            above = b * (dxp * dxp - dyp * dyp) < dxs * dyp * (one + two * dxp / dxs + b * b);
            if b < F::zero() {
                above = !above;
            }
        }
        above
    } else {
        // b == 1
        let y_line = c - a * p.x;
        let t1 = p.y - y_line;
        let t2 = p.x - top.x;
        let t3 = y_line - top.y;
        t1 * t1 > t2 * t2 + t3 * t3
    };

    match side {
        Side::Left => above,
        Side::Right => !above,
    }
}

/// Intersection of the bisectors under two beach-line half-edges.
///
/// Returns `None` for sentinels, for two bisectors of the same right site,
/// for (near-)parallel lines, and when the crossing lies on the wrong side
/// of the half-edge whose right site comes first in sweep order.
pub(crate) fn intersection<F: Float>(
    half_edges: &HalfEdges<F>,
    edges: &[Edge<F>],
    h0: HalfEdgeId,
    h1: HalfEdgeId,
    parallel_epsilon: F,
) -> Option<Point2<F>> {
    let (h0, h1) = (&half_edges[h0], &half_edges[h1]);
    let e0 = &edges[h0.edge?];
    let e1 = &edges[h1.edge?];

    if e0.site(Side::Right) == e1.site(Side::Right) {
        return None;
    }

    let (a0, b0, c0) = e0.coefficients();
    let (a1, b1, c1) = e1.coefficients();
    let determinant = a0 * b1 - b0 * a1;
    if determinant.abs() < parallel_epsilon {
        return None;
    }

    let x = (c0 * b1 - c1 * b0) / determinant;
    let y = (c1 * a0 - c0 * a1) / determinant;

    let (side, edge) = match compare_y_then_x(e0.site_coord(Side::Right), e1.site_coord(Side::Right)) {
        Ordering::Less => (h0.side, e0),
        _ => (h1.side, e1),
    };

    let right_of_site = x >= edge.site_coord(Side::Right).x;
    if (right_of_site && side == Side::Left) || (!right_of_site && side == Side::Right) {
        return None;
    }

    Some(Point2::new(x, y))
}
