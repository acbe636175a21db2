//! Redundant edge selection shared by every spanning tree engine.

use std::collections::HashSet;

use crate::graph::traits::types::{Edge, VertexId};

use super::helpers::sorted_by_weight;

/// The `k` cheapest edges whose canonical pair does not appear in `mst`.
///
/// Parallel copies of a tree edge share its canonical pair and are excluded
/// with it. Ties keep input order, as in Kruskal's sort.
pub fn redundant_edges_impl(edges: &[Edge], mst: &[Edge], k: usize) -> Vec<Edge> {
    if k == 0 {
        return Vec::new();
    }

    let tree: HashSet<(VertexId, VertexId)> = mst.iter().map(Edge::canonical).collect();

    let pool: Vec<Edge> = edges
        .iter()
        .filter(|e| !tree.contains(&e.canonical()))
        .copied()
        .collect();

    let mut selected = sorted_by_weight(&pool);
    selected.truncate(k);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_scenario() {
        let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
        let mst = [edges[0], edges[1]];
        assert_eq!(redundant_edges_impl(&edges, &mst, 1), vec![edges[2]]);
    }

    #[test]
    fn test_reversed_orientation_is_same_edge() {
        let edges = [Edge::new(2, 1, 2), Edge::new(0, 2, 3)];
        let mst = [Edge::new(1, 2, 2)];
        assert_eq!(redundant_edges_impl(&edges, &mst, 5), vec![edges[1]]);
    }

    #[test]
    fn test_k_larger_than_pool() {
        let edges = [
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 9),
            Edge::new(0, 2, 4),
            Edge::new(1, 2, 2),
        ];
        let mst = [edges[0], edges[3]];
        // 1-2 (9) shares the canonical pair of the tree edge 1-2 (2).
        assert_eq!(redundant_edges_impl(&edges, &mst, 10), vec![edges[2]]);
    }

    #[test]
    fn test_sorted_and_stable() {
        let edges = [
            Edge::new(0, 1, 0),
            Edge::new(0, 2, 7),
            Edge::new(0, 3, 3),
            Edge::new(1, 3, 7),
            Edge::new(2, 3, 3),
        ];
        let mst = [edges[0]];
        assert_eq!(
            redundant_edges_impl(&edges, &mst, 3),
            vec![edges[2], edges[4], edges[1]]
        );
    }

    #[test]
    fn test_zero_budget() {
        let edges = [Edge::new(0, 1, 1)];
        assert!(redundant_edges_impl(&edges, &[], 0).is_empty());
    }

    #[test]
    fn test_empty_mst_selects_from_all() {
        let edges = [Edge::new(0, 0, 5), Edge::new(0, 1, 1)];
        assert_eq!(redundant_edges_impl(&edges, &[], 2), vec![edges[1], edges[0]]);
    }
}
