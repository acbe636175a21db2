//! Batch input tokenizer.
//!
//! A batch is a sequence of graph blocks separated by blank lines. Each block
//! starts with a header `n k` followed by edge lines `src dest weight`.
//! Malformed lines are reported and skipped; they never abort the batch.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::batch::error::BatchResult;
use crate::graph::{Edge, EdgeSet, GraphError, Weight};

/// A skipped input line (or rejected graph) with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: Invalid graph header format: {text}")]
    InvalidHeader { line: usize, text: String },

    #[error("line {line}: Invalid edge format: {text}")]
    InvalidEdge { line: usize, text: String },

    #[error("line {line}: vertex {vertex} out of range for {n} vertices: {text}")]
    InvalidVertex {
        line: usize,
        text: String,
        vertex: i64,
        n: usize,
    },

    /// The whole graph starting at `line` was rejected.
    #[error("graph at line {line} rejected: {source}")]
    InvalidGraph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidHeader { line, .. }
            | Self::InvalidEdge { line, .. }
            | Self::InvalidVertex { line, .. }
            | Self::InvalidGraph { line, .. } => *line,
        }
    }
}

/// A graph block that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGraph {
    /// Line number of the block's header.
    pub line: usize,
    pub graph: EdgeSet,
}

/// Everything recovered from one batch input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBatch {
    pub graphs: Vec<ParsedGraph>,
    pub diagnostics: Vec<ParseError>,
}

/// Ingestion settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Reject graphs with any weight outside `[min, max]`.
    pub weight_range: Option<(Weight, Weight)>,
}

struct Block {
    line: usize,
    n: usize,
    k: i64,
    edges: Vec<Edge>,
}

/// Parse batch text with default options.
pub fn parse_batch(input: &str) -> ParsedBatch {
    parse_batch_with(input, &ParseOptions::default())
}

/// Parse batch text.
///
/// Outside a block, every non-blank line is tried as a header, so a bad
/// header makes the lines after it be tried as headers too until one parses.
pub fn parse_batch_with(input: &str, options: &ParseOptions) -> ParsedBatch {
    let mut batch = ParsedBatch::default();
    let mut current: Option<Block> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();

        if text.is_empty() {
            if let Some(block) = current.take() {
                close_block(block, options, &mut batch);
            }
            continue;
        }

        match current.as_mut() {
            None => match parse_header(text) {
                Some((n, k)) => {
                    current = Some(Block {
                        line,
                        n,
                        k,
                        edges: Vec::new(),
                    })
                }
                None => report(
                    &mut batch,
                    ParseError::InvalidHeader {
                        line,
                        text: text.to_string(),
                    },
                ),
            },
            Some(block) => match parse_edge(text, line, block.n) {
                Ok(edge) => block.edges.push(edge),
                Err(err) => report(&mut batch, err),
            },
        }
    }

    if let Some(block) = current.take() {
        close_block(block, options, &mut batch);
    }

    debug!(
        "parsed {} graphs, skipped {} lines",
        batch.graphs.len(),
        batch.diagnostics.len()
    );

    batch
}

/// Read and parse a batch file.
pub fn read_batch<P: AsRef<Path>>(path: P, options: &ParseOptions) -> BatchResult<ParsedBatch> {
    let content = fs::read_to_string(path)?;
    Ok(parse_batch_with(&content, options))
}

fn report(batch: &mut ParsedBatch, err: ParseError) {
    warn!("{err}");
    batch.diagnostics.push(err);
}

fn close_block(block: Block, options: &ParseOptions, batch: &mut ParsedBatch) {
    let line = block.line;
    let graph = EdgeSet::new(block.n, block.k, block.edges).and_then(|graph| {
        if let Some((min, max)) = options.weight_range {
            graph.validate_weights(min, max)?;
        }
        Ok(graph)
    });

    match graph {
        Ok(graph) => batch.graphs.push(ParsedGraph { line, graph }),
        Err(source) => report(batch, ParseError::InvalidGraph { line, source }),
    }
}

fn parse_ints<const N: usize>(text: &str) -> Option<[i64; N]> {
    let mut values = [0i64; N];
    let mut tokens = text.split_whitespace();
    for value in values.iter_mut() {
        *value = tokens.next()?.parse().ok()?;
    }
    match tokens.next() {
        Some(_) => None,
        None => Some(values),
    }
}

/// `n k` with `n >= 0`. A negative `k` is kept and clamped later.
fn parse_header(text: &str) -> Option<(usize, i64)> {
    let [n, k] = parse_ints::<2>(text)?;
    let n = usize::try_from(n).ok()?;
    Some((n, k))
}

fn parse_edge(text: &str, line: usize, n: usize) -> Result<Edge, ParseError> {
    let [src, dest, weight] = parse_ints::<3>(text).ok_or_else(|| ParseError::InvalidEdge {
        line,
        text: text.to_string(),
    })?;

    let vertex = |v: i64| {
        usize::try_from(v)
            .ok()
            .filter(|&v| v < n)
            .ok_or_else(|| ParseError::InvalidVertex {
                line,
                text: text.to_string(),
                vertex: v,
                n,
            })
    };

    Ok(Edge::new(vertex(src)?, vertex(dest)?, weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::report::CaseOutcome;
    use crate::batch::runner::{RunOptions, run_batch};
    use crate::graph::MAX_VERTICES;

    const SAMPLE: &str = "\
3 1
0 1 1
1 2 2
0 2 3

4 0
0 1 5
2 3 7
";

    #[test]
    fn test_parse_two_blocks() {
        let batch = parse_batch(SAMPLE);
        assert!(batch.diagnostics.is_empty());
        assert_eq!(batch.graphs.len(), 2);

        let first = &batch.graphs[0];
        assert_eq!(first.line, 1);
        assert_eq!(first.graph.n(), 3);
        assert_eq!(first.graph.k(), 1);
        assert_eq!(first.graph.edges()[2], Edge::new(0, 2, 3));

        let second = &batch.graphs[1];
        assert_eq!(second.line, 6);
        assert_eq!(second.graph.edges().len(), 2);
    }

    #[test]
    fn test_malformed_edge_lines_skipped() {
        let input = "3 1\n0 1 1\n0 x 4\n1 2\n1 2 2 9\n1 2 2\n";
        let batch = parse_batch(input);
        assert_eq!(batch.graphs.len(), 1);
        assert_eq!(
            batch.graphs[0].graph.edges(),
            &[Edge::new(0, 1, 1), Edge::new(1, 2, 2)]
        );
        let lines: Vec<_> = batch.diagnostics.iter().map(ParseError::line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(matches!(batch.diagnostics[0], ParseError::InvalidEdge { .. }));
    }

    #[test]
    fn test_out_of_range_vertex_skipped() {
        let batch = parse_batch("2 0\n0 1 1\n0 2 1\n-1 1 3\n");
        assert_eq!(batch.graphs[0].graph.edges(), &[Edge::new(0, 1, 1)]);
        assert_eq!(
            batch.diagnostics,
            vec![
                ParseError::InvalidVertex {
                    line: 3,
                    text: "0 2 1".to_string(),
                    vertex: 2,
                    n: 2
                },
                ParseError::InvalidVertex {
                    line: 4,
                    text: "-1 1 3".to_string(),
                    vertex: -1,
                    n: 2
                },
            ]
        );
    }

    #[test]
    fn test_bad_header_retries_following_lines() {
        // "3" is not a header; "0 1 1" is not a header either; "2 0" is.
        let input = "3\n0 1 1\n2 0\n0 1 4\n";
        let batch = parse_batch(input);
        assert_eq!(batch.graphs.len(), 1);
        assert_eq!(batch.graphs[0].line, 3);
        assert_eq!(batch.graphs[0].graph.edges(), &[Edge::new(0, 1, 4)]);
        assert_eq!(batch.diagnostics.len(), 2);
        assert!(
            batch
                .diagnostics
                .iter()
                .all(|d| matches!(d, ParseError::InvalidHeader { .. }))
        );
    }

    #[test]
    fn test_negative_vertex_count_is_bad_header() {
        let batch = parse_batch("-3 1\n");
        assert!(batch.graphs.is_empty());
        assert_eq!(batch.diagnostics.len(), 1);
    }

    #[test]
    fn test_negative_k_clamped() {
        let batch = parse_batch("2 -3\n0 1 1\n");
        assert_eq!(batch.graphs[0].graph.k(), 0);
    }

    #[test]
    fn test_whitespace_lines_separate_blocks() {
        let batch = parse_batch("2 0\n0 1 1\n   \t\n2 0\n1 0 2");
        assert_eq!(batch.graphs.len(), 2);
        assert_eq!(batch.graphs[1].graph.edges(), &[Edge::new(1, 0, 2)]);
    }

    #[test]
    fn test_header_only_block() {
        let batch = parse_batch("\n\n5 2\n\n");
        assert_eq!(batch.graphs.len(), 1);
        assert!(batch.graphs[0].graph.is_empty());
    }

    #[test]
    fn test_oversized_vertex_count_rejected() {
        let input = "9223372036854775807 1\n0 1 1\n\n3 1\n0 1 1\n1 2 2\n0 2 3\n";
        let batch = parse_batch(input);

        assert_eq!(batch.graphs.len(), 1);
        assert_eq!(batch.graphs[0].line, 4);
        assert_eq!(
            batch.diagnostics,
            vec![ParseError::InvalidGraph {
                line: 1,
                source: GraphError::TooManyVertices {
                    n: 9223372036854775807,
                    limit: MAX_VERTICES
                },
            }]
        );

        let runs = run_batch(&batch.graphs, &RunOptions::default());
        for run in &runs {
            match &run.outcomes[..] {
                [CaseOutcome::Solved(report)] => assert_eq!(report.mst.total_weight, 3),
                other => panic!("{}: {other:?}", run.method),
            }
        }
    }

    #[test]
    fn test_weight_range_rejects_graph() {
        let options = ParseOptions {
            weight_range: Some((1, 20)),
        };
        let batch = parse_batch_with("2 0\n0 1 25\n\n2 0\n0 1 20\n", &options);
        assert_eq!(batch.graphs.len(), 1);
        assert_eq!(batch.graphs[0].line, 4);
        assert_eq!(
            batch.diagnostics,
            vec![ParseError::InvalidGraph {
                line: 1,
                source: GraphError::WeightOutOfRange {
                    weight: 25,
                    min: 1,
                    max: 20
                },
            }]
        );
    }
}
