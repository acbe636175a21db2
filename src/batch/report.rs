//! Rendering of batch results as plain text or JSON.

use std::fmt::Write;

use serde::Serialize;

use crate::batch::error::BatchResult;
use crate::batch::parser::ParseError;
use crate::graph::{Edge, MSTMethod, MSTResult};

const RULE: &str = "---------------------------------------------------------------------";

/// Solution of one graph by one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// 1-based position among successfully parsed graphs.
    pub index: usize,
    /// Line of the graph's header in the input.
    pub line: usize,
    pub n: usize,
    pub k: usize,
    pub mst: MSTResult,
    pub redundant: Vec<Edge>,
}

/// Outcome of one graph under one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Solved(CaseReport),
    Failed {
        index: usize,
        line: usize,
        error: String,
    },
}

impl CaseOutcome {
    pub fn index(&self) -> usize {
        match self {
            CaseOutcome::Solved(report) => report.index,
            CaseOutcome::Failed { index, .. } => *index,
        }
    }
}

/// All outcomes of one method over the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRun {
    pub method: MSTMethod,
    pub outcomes: Vec<CaseOutcome>,
}

/// JSON document for a whole run.
#[derive(Debug, Serialize)]
struct BatchDocument<'a> {
    runs: &'a [MethodRun],
    diagnostics: Vec<String>,
}

/// Plain-text rendering of one case, in the tool's traditional layout.
pub fn render_case(outcome: &CaseOutcome) -> String {
    let mut out = String::new();
    match outcome {
        CaseOutcome::Solved(report) => {
            let _ = writeln!(out, "Graph {}:", report.index);
            let _ = writeln!(out, "Edges in the Minimum Spanning Tree:");
            for edge in &report.mst.edges {
                let _ = writeln!(out, "{edge}");
            }
            let _ = writeln!(
                out,
                "Total Weight of the Minimum Spanning Tree: {}",
                report.mst.total_weight
            );
            let _ = writeln!(out, "Additional Redundant Edges for Reliability:");
            for edge in &report.redundant {
                let _ = writeln!(out, "{edge}");
            }
        }
        CaseOutcome::Failed { index, error, .. } => {
            let _ = writeln!(out, "Graph {index}:");
            let _ = writeln!(out, "No Minimum Spanning Tree found: {error}");
        }
    }
    out.push('\n');
    out
}

/// Plain-text rendering of a run: skipped lines first, then one section per
/// method.
pub fn render_text(runs: &[MethodRun], diagnostics: &[ParseError]) -> String {
    let mut out = String::new();

    for diagnostic in diagnostics {
        let _ = writeln!(out, "{diagnostic}");
    }
    if !diagnostics.is_empty() {
        out.push('\n');
    }

    for run in runs {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Output for {}", run.method.title());
        let _ = writeln!(out, "{RULE}");
        for outcome in &run.outcomes {
            out.push_str(&render_case(outcome));
        }
    }

    out
}

/// Pretty-printed JSON rendering of a run.
pub fn render_json(runs: &[MethodRun], diagnostics: &[ParseError]) -> BatchResult<String> {
    let document = BatchDocument {
        runs,
        diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
