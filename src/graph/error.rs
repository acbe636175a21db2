//! Error types for spanning tree operations.

use thiserror::Error;

/// Result type for spanning tree operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or solving a graph instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, n)`.
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    InvalidVertex { vertex: i64, n: usize },

    /// The vertex count exceeds what the engines can allocate for.
    #[error("{n} vertices exceeds the limit of {limit}")]
    TooManyVertices { n: usize, limit: usize },

    /// Input is too large for the requested algorithm.
    #[error("{edges} edges exceeds the limit of {limit} for this algorithm")]
    TooManyEdges { edges: usize, limit: usize },

    /// A spanning tree was required but the graph has several components.
    #[error("graph is disconnected ({components} components), no spanning tree exists")]
    Disconnected { components: usize },

    /// Weight bounds are inverted.
    #[error("invalid weight range: min {min} > max {max}")]
    InvalidWeightRange { min: i64, max: i64 },

    /// An edge weight falls outside the accepted range.
    #[error("edge weight {weight} is outside [{min}, {max}]")]
    WeightOutOfRange { weight: i64, min: i64, max: i64 },
}
