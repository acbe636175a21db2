//! Brute-force minimum spanning tree over edge subsets.
//!
//! Exponential in the number of edges; intended as a reference for checking
//! the fast engines on small graphs.

use log::debug;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{Edge, EdgeSet, MSTResult, Weight};

use super::helpers::count_components;
use super::union_find::UnionFind;

/// Largest edge count accepted by [`exhaustive_impl`].
pub const EXHAUSTIVE_MAX_EDGES: usize = 20;

/// Lightest spanning tree among all subsets of exactly `n - 1` edges.
///
/// Subsets are visited in increasing bitmask order (bit `i` = input edge
/// `i`); the first of several equally light trees is returned. Edges keep
/// their input order in the result.
///
/// Time: O(2^E · V)
pub fn exhaustive_impl(graph: &EdgeSet) -> GraphResult<MSTResult> {
    let n = graph.n();
    let edges = graph.edges();
    let m = edges.len();

    if m > EXHAUSTIVE_MAX_EDGES {
        return Err(GraphError::TooManyEdges {
            edges: m,
            limit: EXHAUSTIVE_MAX_EDGES,
        });
    }

    let components = count_components(edges, n);
    if components > 1 {
        return Err(GraphError::Disconnected { components });
    }
    if n <= 1 {
        return Ok(MSTResult::default());
    }

    let tree_size = (n - 1) as u32;
    let mut best: Option<(Weight, u32)> = None;
    let mut visited = 0usize;

    for mask in 0u32..(1u32 << m) {
        if mask.count_ones() != tree_size {
            continue;
        }
        visited += 1;

        let weight: Weight = subset(edges, mask).map(|e| e.weight).sum();
        if best.is_some_and(|(w, _)| w <= weight) {
            continue;
        }
        if is_spanning_tree(edges, mask, n) {
            best = Some((weight, mask));
        }
    }

    debug!("exhaustive: checked {visited} subsets of {m} edges");

    match best {
        Some((_, mask)) => Ok(MSTResult::from_edges(subset(edges, mask).copied().collect())),
        None => Err(GraphError::Disconnected { components }),
    }
}

fn subset(edges: &[Edge], mask: u32) -> impl Iterator<Item = &Edge> {
    edges
        .iter()
        .enumerate()
        .filter(move |(i, _)| mask & (1 << i) != 0)
        .map(|(_, e)| e)
}

/// `n - 1` acyclic edges on `n` vertices always span them.
fn is_spanning_tree(edges: &[Edge], mask: u32, n: usize) -> bool {
    let mut uf = UnionFind::new(n);
    subset(edges, mask).all(|e| uf.union(e.src, e.dest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_set(n: usize, edges: &[(usize, usize, i64)]) -> EdgeSet {
        EdgeSet::new(n, 0, edges.iter().copied().map(Edge::from).collect()).unwrap()
    }

    #[test]
    fn test_power_grid_example() {
        let graph = edge_set(
            4,
            &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4), (1, 2, 7)],
        );
        let result = exhaustive_impl(&graph).unwrap();
        assert_eq!(result.total_weight, 16);
        assert_eq!(
            result.edges,
            vec![Edge::new(0, 3, 5), Edge::new(2, 3, 4), Edge::new(1, 2, 7)]
        );
    }

    #[test]
    fn test_disconnected() {
        let graph = edge_set(4, &[(0, 1, 5), (2, 3, 7)]);
        assert_eq!(
            exhaustive_impl(&graph),
            Err(GraphError::Disconnected { components: 2 })
        );
    }

    #[test]
    fn test_too_many_edges() {
        let edges: Vec<_> = (0..21).map(|i| (0, 1, i)).collect();
        let graph = edge_set(2, &edges);
        assert_eq!(
            exhaustive_impl(&graph),
            Err(GraphError::TooManyEdges {
                edges: 21,
                limit: EXHAUSTIVE_MAX_EDGES
            })
        );
    }

    #[test]
    fn test_trivial_graphs() {
        assert!(exhaustive_impl(&edge_set(0, &[])).unwrap().is_empty());
        assert!(exhaustive_impl(&edge_set(1, &[(0, 0, 3)])).unwrap().is_empty());
    }

    #[test]
    fn test_cycle_rejected() {
        // Lightest 2-subset is the parallel pair, which is not a tree.
        let graph = edge_set(3, &[(0, 1, 1), (1, 0, 1), (1, 2, 9)]);
        let result = exhaustive_impl(&graph).unwrap();
        assert_eq!(result.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 9)]);
    }
}
