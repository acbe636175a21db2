//! Prim's algorithm for minimum spanning trees.
//!
//! Uses a binary heap frontier with lazy deletion. A tree edge is recorded
//! when its far endpoint is popped and enters the tree, never when it is
//! pushed: recording at push time can keep a frontier edge that a cheaper
//! edge to the same vertex later beats, and can emit more than `n - 1` edges.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::graph::traits::types::{Edge, EdgeSet, MSTResult, VertexId, Weight};

use super::helpers::{AdjacencyList, build_adjacency};

/// Frontier entry: (weight, push sequence, vertex, tree vertex that reached it).
///
/// The push sequence breaks weight ties in discovery order.
type Frontier = BinaryHeap<Reverse<(Weight, u64, VertexId, Option<VertexId>)>>;

/// Prim's minimum spanning tree grown from vertex 0.
///
/// Vertices not reachable from 0 never enter the tree and are absent from
/// the result.
///
/// Time: O(E log V)
pub fn prim_impl(graph: &EdgeSet) -> MSTResult {
    let n = graph.n();
    let adj = build_adjacency(graph.edges(), n);
    let mut in_tree = vec![false; n];
    let mut mst = Vec::with_capacity(n.saturating_sub(1));

    if n > 0 {
        grow_tree(&adj, 0, &mut in_tree, &mut mst);
    }

    debug!("prim: finalized {} edges from vertex 0 over {n} vertices", mst.len());

    MSTResult::from_edges(mst)
}

/// Prim's minimum spanning forest: restarts from the lowest vertex not yet in
/// any tree until every vertex is covered.
///
/// Time: O(V + E log V)
pub fn prim_forest_impl(graph: &EdgeSet) -> MSTResult {
    let n = graph.n();
    let adj = build_adjacency(graph.edges(), n);
    let mut in_tree = vec![false; n];
    let mut mst = Vec::with_capacity(n.saturating_sub(1));
    let mut trees = 0;

    for root in 0..n {
        if in_tree[root] {
            continue;
        }
        grow_tree(&adj, root, &mut in_tree, &mut mst);
        trees += 1;
    }

    debug!("prim-forest: {} edges in {trees} trees over {n} vertices", mst.len());

    MSTResult::from_edges(mst)
}

/// Grow one tree from `root`, appending finalized edges to `mst`.
fn grow_tree(adj: &AdjacencyList, root: VertexId, in_tree: &mut [bool], mst: &mut Vec<Edge>) {
    let limit = adj.len().saturating_sub(1);
    let mut heap = Frontier::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((0, seq, root, None)));

    while let Some(Reverse((weight, _, node, parent))) = heap.pop() {
        // Stale entry: node was reached earlier through a cheaper edge
        if in_tree[node] {
            continue;
        }
        in_tree[node] = true;

        if let Some(parent) = parent {
            mst.push(Edge::new(parent, node, weight));
            if mst.len() == limit {
                break;
            }
        }

        for &(w, next) in &adj[node] {
            if !in_tree[next] {
                seq += 1;
                heap.push(Reverse((w, seq, next, Some(node))));
            }
        }
    }
}
