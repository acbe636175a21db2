//! Union-Find (disjoint set) with path compression and union by rank.
//!
//! Tie-break on equal rank: the root of the first argument to
//! [`UnionFind::union`] becomes the new root and its rank grows by one.
//! Kruskal's edge acceptance does not depend on which root wins, but the
//! representative returned by `find` does, so the rule is fixed here.

/// Disjoint sets over `{0..n-1}`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    ///
    /// Two passes: locate the root, then point every node on the path at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);

        if px == py {
            return false;
        }

        // Union by rank
        if self.rank[px] < self.rank[py] {
            self.parent[px] = py;
        } else if self.rank[px] > self.rank[py] {
            self.parent[py] = px;
        } else {
            self.parent[py] = px;
            self.rank[px] += 1;
        }

        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    pub fn count_components(&mut self) -> usize {
        (0..self.len()).filter(|&x| self.find(x) == x).count()
    }

    #[cfg(test)]
    fn rank_of(&self, x: usize) -> u32 {
        self.rank[x]
    }

    #[cfg(test)]
    fn parent_of(&self, x: usize) -> usize {
        self.parent[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.count_components(), 4);
        for x in 0..4 {
            assert_eq!(uf.find(x), x);
        }
    }

    #[test]
    fn test_union_is_noop_within_set() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert!(!uf.union(0, 1));
        assert_eq!(uf.count_components(), 2);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(0, 2));
    }

    #[test]
    fn test_equal_rank_keeps_first_root() {
        let mut uf = UnionFind::new(4);
        uf.union(2, 3);
        assert_eq!(uf.find(3), 2);
        assert_eq!(uf.rank_of(2), 1);

        uf.union(1, 0);
        assert_eq!(uf.find(0), 1);

        // Equal ranks again: root of the first argument wins.
        uf.union(0, 3);
        assert_eq!(uf.find(2), 1);
        assert_eq!(uf.rank_of(1), 2);
    }

    #[test]
    fn test_lower_rank_attaches_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        uf.union(2, 0);
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank_of(0), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(8);
        // Build a tree of rank 3 rooted at 0.
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        uf.union(4, 5);
        uf.union(6, 7);
        uf.union(4, 6);
        uf.union(0, 4);

        assert_eq!(uf.parent_of(7), 6);
        assert_eq!(uf.find(7), 0);
        assert_eq!(uf.parent_of(7), 0);
        assert_eq!(uf.parent_of(6), 0);
        assert_eq!(uf.count_components(), 1);
    }

    #[test]
    fn test_empty() {
        let mut uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count_components(), 0);
    }
}
