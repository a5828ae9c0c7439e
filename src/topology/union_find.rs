//! Union-Find over sample indices
//!
//! Vertices are the contiguous, zero-indexed positions `0..n` of the
//! sampled function. Every vertex starts as its own parent.
//!
//! Unlike a rank- or size-balanced union, `merge` is **directional**: the
//! component of `u` is attached below the component of `v`. The persistence
//! sweep relies on this to keep the representative of the elder (taller)
//! component alive, since that representative is the birth peak whose
//! diagram entry is extended by later merges.

/// Disjoint-set forest with path compression and directional merges
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Create `n` singleton components
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the component containing `u`
    ///
    /// Every vertex visited on the way up is re-parented directly to the
    /// root. Panics if `u` is out of range.
    pub fn find(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = u;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the component of `u` into the component of `v`
    ///
    /// Afterwards both `u` and `v` resolve to the previous representative of `v`.
    pub fn merge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        let root_u = self.find(u);
        let root_v = self.find(v);
        self.parent[root_u] = root_v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_merge_is_directional() {
        let mut uf = UnionFind::new(3);
        uf.merge(0, 1);
        assert_eq!(uf.find(0), 1);
        assert_eq!(uf.find(1), 1);

        // The second argument's representative survives
        uf.merge(1, 2);
        assert_eq!(uf.find(0), 2);

        let mut uf = UnionFind::new(3);
        uf.merge(1, 0);
        assert_eq!(uf.find(1), 0);
    }

    #[test]
    fn test_merge_same_component_is_noop() {
        let mut uf = UnionFind::new(3);
        uf.merge(0, 1);
        uf.merge(0, 1);
        uf.merge(1, 0);
        uf.merge(2, 2);
        assert_eq!(uf.find(0), uf.find(1));
        assert_eq!(uf.find(2), 2);
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        // Build a long chain 0 -> 1 -> 2 -> ... -> n-1
        for i in 0..n - 1 {
            uf.merge(i, i + 1);
        }
        assert_eq!(uf.find(0), n - 1);

        // After compression every vertex points straight at the root
        for i in 0..n {
            assert_eq!(uf.parent[i], n - 1);
        }
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
    }
}
