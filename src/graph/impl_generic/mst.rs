//! Minimum spanning forest via Kruskal's algorithm (undirected graphs).
//!
//! Uses union-find with path compression and union by rank.

use log::debug;

use crate::graph::traits::types::{EdgeSet, MSTResult};

use super::helpers::sorted_by_weight;
use super::union_find::UnionFind;

/// Kruskal's minimum spanning forest.
///
/// Equal-weight edges are considered in input order. For a graph with `c`
/// components the result has `n - c` edges.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal_impl(graph: &EdgeSet) -> MSTResult {
    let n = graph.n();
    let edges = sorted_by_weight(graph.edges());

    // Kruskal's: greedily add edges that don't form cycles
    let mut uf = UnionFind::new(n);
    let mut mst = Vec::with_capacity(n.saturating_sub(1));

    for edge in edges {
        if uf.find(edge.src) != uf.find(edge.dest) {
            uf.union(edge.src, edge.dest);
            mst.push(edge);

            // Stop when we have n-1 edges
            if mst.len() == n - 1 {
                break;
            }
        }
    }

    debug!("kruskal: accepted {} of {} edges over {n} vertices", mst.len(), graph.edges().len());

    MSTResult::from_edges(mst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traits::types::Edge;

    fn edge_set(n: usize, edges: &[(usize, usize, i64)]) -> EdgeSet {
        EdgeSet::new(n, 0, edges.iter().copied().map(Edge::from).collect()).unwrap()
    }

    #[test]
    fn test_triangle() {
        let graph = edge_set(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
        let result = kruskal_impl(&graph);
        assert_eq!(result.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
        assert_eq!(result.total_weight, 3);
    }

    #[test]
    fn test_ties_follow_input_order() {
        // Any two of the three unit edges form a tree; the first two win.
        let graph = edge_set(3, &[(1, 2, 1), (0, 2, 1), (0, 1, 1)]);
        let result = kruskal_impl(&graph);
        assert_eq!(result.edges, vec![Edge::new(1, 2, 1), Edge::new(0, 2, 1)]);
    }

    #[test]
    fn test_negative_weights() {
        let graph = edge_set(3, &[(0, 1, -5), (1, 2, 0), (0, 2, -1)]);
        let result = kruskal_impl(&graph);
        assert_eq!(result.total_weight, -6);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let graph = edge_set(2, &[(0, 0, -10), (0, 1, 3), (1, 0, 2)]);
        let result = kruskal_impl(&graph);
        assert_eq!(result.edges, vec![Edge::new(1, 0, 2)]);
    }

    #[test]
    fn test_empty_graph() {
        let result = kruskal_impl(&edge_set(0, &[]));
        assert!(result.is_empty());
        assert_eq!(result.total_weight, 0);

        let result = kruskal_impl(&edge_set(5, &[]));
        assert!(result.is_empty());
    }
}
