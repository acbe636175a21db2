//! Random graph batches for benchmarking and stress testing.

use std::fmt::Write;

use rand::Rng;

use crate::graph::{Edge, EdgeSet, GraphError, GraphResult, Weight};

/// Shape of a generated batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of graph blocks.
    pub graphs: usize,
    /// Vertices per graph.
    pub nodes: usize,
    /// Edges per graph.
    pub edges: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
    /// Redundancy budget written into each header.
    pub k: i64,
}

/// Random edges on `n` vertices.
///
/// Endpoints are uniform, self-loops are redrawn, repeated vertex pairs are
/// allowed. Weights are uniform in `[min_weight, max_weight]`.
///
/// # Errors
/// [`GraphError::TooManyEdges`] if `num_edges > n(n-1)/2`,
/// [`GraphError::InvalidWeightRange`] if `min_weight > max_weight`.
pub fn generate_edges<R: Rng>(
    n: usize,
    num_edges: usize,
    min_weight: Weight,
    max_weight: Weight,
    rng: &mut R,
) -> GraphResult<Vec<Edge>> {
    // n(n-1)/2, saturating when it exceeds usize
    let limit: usize = (n as u128 * n.saturating_sub(1) as u128 / 2)
        .try_into()
        .unwrap_or(usize::MAX);
    if num_edges > limit {
        return Err(GraphError::TooManyEdges {
            edges: num_edges,
            limit,
        });
    }
    if min_weight > max_weight {
        return Err(GraphError::InvalidWeightRange {
            min: min_weight,
            max: max_weight,
        });
    }

    let mut edges = Vec::with_capacity(num_edges);
    while edges.len() < num_edges {
        let src = rng.random_range(0..n);
        let dest = rng.random_range(0..n);
        if src != dest {
            let weight = rng.random_range(min_weight..=max_weight);
            edges.push(Edge::new(src, dest, weight));
        }
    }
    Ok(edges)
}

/// Generate `options.graphs` independent graphs.
pub fn generate_batch<R: Rng>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> GraphResult<Vec<EdgeSet>> {
    (0..options.graphs)
        .map(|_| {
            let edges = generate_edges(
                options.nodes,
                options.edges,
                options.min_weight,
                options.max_weight,
                rng,
            )?;
            EdgeSet::new(options.nodes, options.k, edges)
        })
        .collect()
}

/// Render graphs in the batch input format, one blank line between blocks.
pub fn render_batch(graphs: &[EdgeSet]) -> String {
    let mut out = String::new();
    for (i, graph) in graphs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} {}", graph.n(), graph.k());
        for edge in graph.edges() {
            let _ = writeln!(out, "{} {} {}", edge.src, edge.dest, edge.weight);
        }
    }
    out
}
