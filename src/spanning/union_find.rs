//! Disjoint sets over dense node indices.

/// Union-find with union by size and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set holding `u`.
    pub fn find_root(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass points the whole path at the root.
        let mut node = u;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Size of the set holding `u`.
    pub fn set_size(&mut self, u: usize) -> usize {
        let root = self.find_root(u);
        self.size[root]
    }

    /// Joins the sets of `u` and `v`. Returns `false` if they were already
    /// one set.
    pub fn merge(&mut self, u: usize, v: usize) -> bool {
        let (mut u, mut v) = (self.find_root(u), self.find_root(v));
        if u == v {
            return false;
        }
        if self.size[u] < self.size[v] {
            std::mem::swap(&mut u, &mut v);
        }
        self.parent[v] = u;
        self.size[u] += self.size[v];
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut set = DisjointSet::new(3);
        assert_eq!(set.len(), 3);
        for u in 0..3 {
            assert_eq!(set.find_root(u), u);
            assert_eq!(set.set_size(u), 1);
        }
    }

    #[test]
    fn test_merge() {
        let mut set = DisjointSet::new(5);
        assert!(set.merge(0, 1));
        assert!(set.merge(2, 3));
        assert!(set.merge(1, 3));
        assert!(!set.merge(0, 2));

        assert_eq!(set.find_root(0), set.find_root(3));
        assert_ne!(set.find_root(0), set.find_root(4));
        assert_eq!(set.set_size(2), 4);
        assert_eq!(set.set_size(4), 1);
    }

    #[test]
    fn test_long_chain_compresses() {
        let n = 10_000;
        let mut set = DisjointSet::new(n);
        // Build a path by hand, deeper than any recursion limit would like.
        for u in 1..n {
            set.parent[u] = u - 1;
        }
        assert_eq!(set.find_root(n - 1), 0);
        assert_eq!(set.parent[n - 1], 0);
        assert_eq!(set.parent[n / 2], 0);
    }
}
