//! Shared helper functions for graph algorithms.

use crate::graph::traits::types::{Edge, VertexId, Weight};

/// Per-vertex neighbor lists of `(weight, neighbor)`.
pub type AdjacencyList = Vec<Vec<(Weight, VertexId)>>;

/// Build an undirected adjacency list.
///
/// Each edge `(s, d, w)` contributes `(w, d)` to `s` and `(w, s)` to `d`, in
/// input order. Endpoints must already be validated against `n`.
pub fn build_adjacency(edges: &[Edge], n: usize) -> AdjacencyList {
    let mut adj: AdjacencyList = vec![Vec::new(); n];
    for edge in edges {
        adj[edge.src].push((edge.weight, edge.dest));
        adj[edge.dest].push((edge.weight, edge.src));
    }
    adj
}

/// Edges stable-sorted ascending by weight; ties keep input order.
pub fn sorted_by_weight(edges: &[Edge]) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);
    sorted
}

/// Number of connected components, counting isolated vertices.
pub fn count_components(edges: &[Edge], n: usize) -> usize {
    let mut uf = super::union_find::UnionFind::new(n);
    for edge in edges {
        uf.union(edge.src, edge.dest);
    }
    uf.count_components()
}
