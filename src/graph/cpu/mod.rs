//! Sequential CPU backend for spanning tree algorithms.

mod mst;
mod redundancy;

use crate::graph::error::GraphResult;
use crate::graph::traits::{Edge, EdgeSet, MSTAlgorithms, MSTMethod, MSTResult, RedundancyAlgorithms};

/// Runs every algorithm on the calling thread. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuClient;

impl CpuClient {
    pub fn new() -> Self {
        Self
    }
}

/// Compute a minimum spanning tree (or forest) of the graph `(n, edges)`.
///
/// Deterministic: the same input in the same order yields the same edges.
///
/// # Errors
/// [`crate::graph::GraphError::InvalidVertex`] if an endpoint is `>= n`, or
/// the errors of [`MSTAlgorithms::exhaustive_spanning_tree`] for
/// [`MSTMethod::Exhaustive`].
pub fn compute_mst(edges: &[Edge], n: usize, method: MSTMethod) -> GraphResult<MSTResult> {
    let graph = EdgeSet::new(n, 0, edges.to_vec())?;
    CpuClient::new().minimum_spanning_tree(&graph, method)
}

/// The `k` cheapest edges of `edges` not already in `mst`.
pub fn select_redundant(edges: &[Edge], mst: &[Edge], k: usize) -> Vec<Edge> {
    CpuClient::new().redundant_edges(edges, mst, k)
}
