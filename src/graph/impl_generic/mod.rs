//! Generic spanning tree algorithm implementations.

pub mod exhaustive;
pub mod helpers;
pub mod mst;
pub mod prim;
pub mod redundancy;
pub mod union_find;

pub use exhaustive::{EXHAUSTIVE_MAX_EDGES, exhaustive_impl};
pub use mst::kruskal_impl;
pub use prim::{prim_forest_impl, prim_impl};
pub use redundancy::redundant_edges_impl;
pub use union_find::UnionFind;
