//! Redundant edge selection traits.

use super::types::{Edge, EdgeSet, MSTResult};

/// Selection of backup edges that complement a spanning structure.
pub trait RedundancyAlgorithms {
    /// The `k` cheapest edges of `edges` whose canonical pair is not in `mst`.
    ///
    /// Returns fewer than `k` edges only when the pool runs out.
    fn redundant_edges(&self, edges: &[Edge], mst: &[Edge], k: usize) -> Vec<Edge>;

    /// [`RedundancyAlgorithms::redundant_edges`] using the graph's own budget.
    fn redundant_for(&self, graph: &EdgeSet, mst: &MSTResult) -> Vec<Edge> {
        self.redundant_edges(graph.edges(), &mst.edges, graph.k())
    }
}
