//! Graph algorithms for spanning structures.
//!
//! This module provides:
//! - Minimum spanning trees and forests (Kruskal, Prim, Prim forest)
//! - A brute-force reference solver for small graphs
//! - Redundant edge selection on top of any spanning structure
//! - Union-find with path compression and union by rank

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod traits;

pub use cpu::{CpuClient, compute_mst, select_redundant};
pub use error::{GraphError, GraphResult};
pub use impl_generic::UnionFind;
pub use traits::*;
