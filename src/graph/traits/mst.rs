//! Minimum spanning tree algorithm traits.

use crate::graph::error::GraphResult;

use super::types::{EdgeSet, MSTMethod, MSTResult};

/// Minimum spanning tree algorithms.
///
/// Finds the subset of edges that connects all reachable nodes with minimum
/// total weight. Graphs are undirected.
pub trait MSTAlgorithms {
    /// Compute the minimum spanning forest using Kruskal's algorithm.
    ///
    /// Stable-sorts edges by weight and greedily adds edges that don't form
    /// cycles (using union-find). Equal weights keep input order.
    ///
    /// # Complexity
    /// O(E log E) for sorting + O(E α(V)) for union-find.
    fn kruskal(&self, graph: &EdgeSet) -> MSTResult;

    /// Compute the minimum spanning tree of vertex 0's component using Prim's
    /// algorithm. Vertices unreachable from 0 are absent from the result.
    ///
    /// # Complexity
    /// O(E log V) heap operations.
    fn prim(&self, graph: &EdgeSet) -> MSTResult;

    /// Prim's algorithm restarted from every unvisited vertex, giving a full
    /// minimum spanning forest.
    fn prim_forest(&self, graph: &EdgeSet) -> MSTResult;

    /// Brute-force minimum spanning tree over all `n - 1` edge subsets.
    ///
    /// # Errors
    /// Returns error if the graph has too many edges or is disconnected.
    fn exhaustive_spanning_tree(&self, graph: &EdgeSet) -> GraphResult<MSTResult>;

    /// Dispatch on `method`.
    fn minimum_spanning_tree(&self, graph: &EdgeSet, method: MSTMethod) -> GraphResult<MSTResult> {
        match method {
            MSTMethod::Kruskal => Ok(self.kruskal(graph)),
            MSTMethod::Prim => Ok(self.prim(graph)),
            MSTMethod::PrimForest => Ok(self.prim_forest(graph)),
            MSTMethod::Exhaustive => self.exhaustive_spanning_tree(graph),
        }
    }
}
