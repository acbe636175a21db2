//! Batch ingestion, execution and reporting around the spanning tree core.
//!
//! - [`parser`] - Block tokenizer with per-line recovery
//! - [`runner`] - Runs engines over parsed graphs, optionally in parallel
//! - [`report`] - Plain-text and JSON rendering
//! - [`generator`] - Random batches in the input format
//! - [`config`] - TOML configuration

pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod report;
pub mod runner;

pub use config::{OutputFormat, SpanrConfig};
pub use error::{BatchError, BatchResult};
pub use generator::{GeneratorOptions, generate_batch, generate_edges, render_batch};
pub use parser::{ParseError, ParseOptions, ParsedBatch, ParsedGraph, parse_batch, parse_batch_with, read_batch};
pub use report::{CaseOutcome, CaseReport, MethodRun, render_json, render_text};
pub use runner::{RunOptions, run_batch, solve_case};
