//! spanr - Minimum spanning forests with redundant-edge augmentation
//!
//! spanr computes a minimum spanning tree (or forest, for disconnected inputs)
//! for each graph of a batch and then picks up to `k` of the cheapest
//! remaining edges as backups, so the network survives a few link failures.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      batch                               │
//! │   (parser, runner, report, generator, config)           │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                      graph                               │
//! │  (union-find, Kruskal, Prim, exhaustive, redundancy)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`graph`] - Spanning tree engines and redundant edge selection. Pure,
//!   deterministic, no I/O.
//! - [`batch`] - Text ingestion with per-line recovery, optional parallel
//!   execution over independent graphs, text/JSON reports.
//!
//! # Engines
//!
//! | Method | Disconnected input | Notes |
//! |--------|--------------------|-------|
//! | `kruskal` | spanning forest | stable sort, equal weights keep input order |
//! | `prim` | component of vertex 0 only | edges finalized on pop |
//! | `prim-forest` | spanning forest | restarts from each unvisited vertex |
//! | `exhaustive` | error | at most 20 edges |
//!
//! # Example
//!
//! ```
//! use spanr::graph::{Edge, MSTMethod, compute_mst, select_redundant};
//!
//! let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
//! let mst = compute_mst(&edges, 3, MSTMethod::Kruskal).unwrap();
//! assert_eq!(mst.total_weight, 3);
//!
//! let backup = select_redundant(&edges, &mst.edges, 1);
//! assert_eq!(backup, vec![Edge::new(0, 2, 3)]);
//! ```

pub mod batch;
pub mod graph;

// Re-export main types for convenience
pub use batch::{BatchError, BatchResult, ParseError, RunOptions, parse_batch, run_batch};
pub use graph::{
    CpuClient, Edge, EdgeSet, GraphError, GraphResult, MSTAlgorithms, MSTMethod, MSTResult,
    RedundancyAlgorithms, UnionFind, compute_mst, select_redundant,
};
