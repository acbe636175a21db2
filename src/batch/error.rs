//! Error types for batch ingestion and reporting.

use thiserror::Error;

use crate::graph::GraphError;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors that stop a batch run as a whole.
///
/// Per-line problems are not errors at this level; see
/// [`crate::batch::parser::ParseError`].
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
