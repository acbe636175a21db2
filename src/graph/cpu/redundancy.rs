//! CPU implementation of redundant edge selection.

use crate::graph::cpu::CpuClient;
use crate::graph::impl_generic::redundant_edges_impl;
use crate::graph::traits::redundancy::RedundancyAlgorithms;
use crate::graph::traits::types::Edge;

impl RedundancyAlgorithms for CpuClient {
    fn redundant_edges(&self, edges: &[Edge], mst: &[Edge], k: usize) -> Vec<Edge> {
        redundant_edges_impl(edges, mst, k)
    }
}
