//! Per-case pipeline: spanning tree, then redundant edges.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::batch::parser::ParsedGraph;
use crate::batch::report::{CaseOutcome, CaseReport, MethodRun};
use crate::graph::{CpuClient, MSTAlgorithms, MSTMethod, RedundancyAlgorithms};

/// Which engines to run and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub methods: Vec<MSTMethod>,
    /// Solve cases on the rayon pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            methods: vec![MSTMethod::Kruskal, MSTMethod::Prim],
            parallel: false,
        }
    }
}

/// Solve one parsed graph with one method.
///
/// `index` is the graph's 1-based position in the batch.
pub fn solve_case<C>(client: &C, index: usize, parsed: &ParsedGraph, method: MSTMethod) -> CaseOutcome
where
    C: MSTAlgorithms + RedundancyAlgorithms,
{
    let graph = &parsed.graph;
    match client.minimum_spanning_tree(graph, method) {
        Ok(mst) => {
            let redundant = client.redundant_for(graph, &mst);
            debug!(
                "graph {index} ({method}): {} tree edges, weight {}, {} redundant",
                mst.len(),
                mst.total_weight,
                redundant.len()
            );
            CaseOutcome::Solved(CaseReport {
                index,
                line: parsed.line,
                n: graph.n(),
                k: graph.k(),
                mst,
                redundant,
            })
        }
        Err(err) => {
            warn!("graph {index} at line {} ({method}): {err}", parsed.line);
            CaseOutcome::Failed {
                index,
                line: parsed.line,
                error: err.to_string(),
            }
        }
    }
}

/// Run every requested method over every graph.
///
/// Cases are independent; a failed case never stops the batch.
pub fn run_batch(graphs: &[ParsedGraph], options: &RunOptions) -> Vec<MethodRun> {
    let client = CpuClient::new();

    let runs: Vec<MethodRun> = options
        .methods
        .iter()
        .map(|&method| {
            let solve = |(i, parsed): (usize, &ParsedGraph)| solve_case(&client, i + 1, parsed, method);
            let outcomes: Vec<CaseOutcome> = if options.parallel {
                graphs.par_iter().enumerate().map(solve).collect()
            } else {
                graphs.iter().enumerate().map(solve).collect()
            };
            MethodRun { method, outcomes }
        })
        .collect();

    let failed = runs
        .iter()
        .flat_map(|run| &run.outcomes)
        .filter(|outcome| matches!(outcome, CaseOutcome::Failed { .. }))
        .count();
    info!(
        "solved {} graphs with {} methods ({failed} failed cases)",
        graphs.len(),
        runs.len()
    );

    runs
}
