//! Chains a set of edges end to end.

use super::edge::{Edge, EdgeId, Side};
use num_traits::Float;
use std::collections::VecDeque;

/// What counts as a shared endpoint when chaining edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderCriterion {
    /// Edges connect through Voronoi vertices (region outlines).
    Vertex,
    /// Edges connect through their sites (hull walks).
    Site,
}

/// An edge in a chain, with the side that faces backward along it.
///
/// `Side::Left` means the chain passes from the edge's left endpoint to its
/// right endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub edge: EdgeId,
    pub orientation: Side,
}

impl OrientedEdge {
    /// Endpoint where the chain enters this edge.
    #[inline]
    pub fn entry(self) -> Side {
        self.orientation
    }

    /// Endpoint where the chain leaves this edge.
    #[inline]
    pub fn exit(self) -> Side {
        self.orientation.other()
    }
}

fn endpoints<F: Float>(edge: &Edge<F>, criterion: ReorderCriterion) -> Option<(usize, usize)> {
    match criterion {
        ReorderCriterion::Vertex => Some((
            edge.vertex(Side::Left)?.id,
            edge.vertex(Side::Right)?.id,
        )),
        ReorderCriterion::Site => Some((edge.site(Side::Left), edge.site(Side::Right))),
    }
}

/// Orders `subset` into a single connected chain.
///
/// The first edge seeds the chain with orientation `Left`; every later
/// pass attaches whatever edges touch either free end. Returns `None` when
/// an edge lacks a needed vertex, or when a pass attaches nothing, which
/// means the subset does not form one chain.
pub fn reorder_edges<F: Float>(
    edges: &[Edge<F>],
    subset: &[EdgeId],
    criterion: ReorderCriterion,
) -> Option<Vec<OrientedEdge>> {
    let Some(&seed) = subset.first() else {
        return Some(Vec::new());
    };
    let (mut first, mut last) = endpoints(&edges[seed], criterion)?;

    let mut chain = VecDeque::with_capacity(subset.len());
    chain.push_back(OrientedEdge {
        edge: seed,
        orientation: Side::Left,
    });

    let mut placed = vec![false; subset.len()];
    placed[0] = true;
    let mut remaining = subset.len() - 1;

    while remaining > 0 {
        let mut progressed = false;
        for (i, &id) in subset.iter().enumerate() {
            if placed[i] {
                continue;
            }
            let (left, right) = endpoints(&edges[id], criterion)?;
            let oriented = |orientation| OrientedEdge {
                edge: id,
                orientation,
            };

            if left == last {
                last = right;
                chain.push_back(oriented(Side::Left));
            } else if right == first {
                first = left;
                chain.push_front(oriented(Side::Left));
            } else if left == first {
                first = right;
                chain.push_front(oriented(Side::Right));
            } else if right == last {
                last = left;
                chain.push_back(oriented(Side::Right));
            } else {
                continue;
            }

            placed[i] = true;
            remaining -= 1;
            progressed = true;
        }

        if !progressed {
            tracing::warn!(
                ?criterion,
                remaining,
                total = subset.len(),
                "edges do not form a single chain"
            );
            return None;
        }
    }

    Some(chain.into())
}
