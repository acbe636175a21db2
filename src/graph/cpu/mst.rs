//! CPU implementation of minimum spanning tree algorithms.

use crate::graph::cpu::CpuClient;
use crate::graph::error::GraphResult;
use crate::graph::impl_generic::{exhaustive_impl, kruskal_impl, prim_forest_impl, prim_impl};
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{EdgeSet, MSTResult};

impl MSTAlgorithms for CpuClient {
    fn kruskal(&self, graph: &EdgeSet) -> MSTResult {
        kruskal_impl(graph)
    }

    fn prim(&self, graph: &EdgeSet) -> MSTResult {
        prim_impl(graph)
    }

    fn prim_forest(&self, graph: &EdgeSet) -> MSTResult {
        prim_forest_impl(graph)
    }

    fn exhaustive_spanning_tree(&self, graph: &EdgeSet) -> GraphResult<MSTResult> {
        exhaustive_impl(graph)
    }
}
