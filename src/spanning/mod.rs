//! Spanning trees over weighted links.
//!
//! Kruskal's algorithm: links are sorted by weight and accepted whenever
//! they join two different components. Used on the Delaunay links of a
//! diagram, where the minimum tree is the Euclidean minimum spanning tree.

mod union_find;

pub use union_find::DisjointSet;

use num_traits::Float;
use std::cmp::Ordering;

/// Which extreme of total weight the tree should reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanningTreeMode {
    #[default]
    Minimum,
    Maximum,
}

/// A weighted undirected link between two nodes in `0..node_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link<F> {
    pub a: usize,
    pub b: usize,
    pub weight: F,
}

impl<F> Link<F> {
    #[inline]
    pub fn new(a: usize, b: usize, weight: F) -> Self {
        Self { a, b, weight }
    }
}

/// Selects a spanning forest of `links` and returns the chosen indices in
/// acceptance order.
///
/// Equal weights keep their input order. Nodes without links stay
/// isolated; on a disconnected graph the result spans each component.
pub fn kruskal<F: Float>(node_count: usize, links: &[Link<F>], mode: SpanningTreeMode) -> Vec<usize> {
    let mut order: Vec<usize> = (0..links.len()).collect();
    order.sort_by(|&i, &j| {
        let ord = links[i]
            .weight
            .partial_cmp(&links[j].weight)
            .unwrap_or(Ordering::Equal);
        match mode {
            SpanningTreeMode::Minimum => ord,
            SpanningTreeMode::Maximum => ord.reverse(),
        }
    });

    let mut sets = DisjointSet::new(node_count);
    let mut chosen = Vec::with_capacity(node_count.saturating_sub(1));
    for i in order {
        let link = &links[i];
        if sets.merge(link.a, link.b) {
            chosen.push(i);
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_diagonal() -> Vec<Link<f64>> {
        vec![
            Link::new(0, 1, 1.0),
            Link::new(1, 2, 1.0),
            Link::new(2, 3, 1.0),
            Link::new(3, 0, 1.0),
            Link::new(0, 2, 2.0_f64.sqrt()),
        ]
    }

    #[test]
    fn test_minimum_tree() {
        let links = square_with_diagonal();
        let chosen = kruskal(4, &links, SpanningTreeMode::Minimum);
        // Stable sort: the first three unit sides win.
        assert_eq!(chosen, vec![0, 1, 2]);
        let total: f64 = chosen.iter().map(|&i| links[i].weight).sum();
        assert_eq!(total, 3.0);
    }

    #[test]
    fn test_maximum_tree() {
        let links = square_with_diagonal();
        let chosen = kruskal(4, &links, SpanningTreeMode::Maximum);
        assert_eq!(chosen.len(), 3);
        assert_eq!(chosen[0], 4);
        let total: f64 = chosen.iter().map(|&i| links[i].weight).sum();
        assert!((total - (2.0 + 2.0_f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_forest_and_empty() {
        let links = vec![Link::new(0, 1, 3.0), Link::new(2, 3, 1.0)];
        let chosen = kruskal(5, &links, SpanningTreeMode::Minimum);
        assert_eq!(chosen, vec![1, 0]);

        let none: Vec<Link<f64>> = Vec::new();
        assert!(kruskal(3, &none, SpanningTreeMode::Minimum).is_empty());
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(SpanningTreeMode::default(), SpanningTreeMode::Minimum);
    }
}
