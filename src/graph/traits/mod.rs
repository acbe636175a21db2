pub mod mst;
pub mod redundancy;
pub mod types;

pub use mst::MSTAlgorithms;
pub use redundancy::RedundancyAlgorithms;
pub use types::*;
