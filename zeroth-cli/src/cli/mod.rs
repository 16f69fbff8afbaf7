//! Command-line interface orchestration for the zeroth barcode engine.
//!
//! The CLI offers a `run` command that loads a d3 force-layout JSON graph
//! document, computes its barcode, and renders a summary in the same order
//! the barcode view displays bars.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RatioArg, RunCommand, render_summary, run_cli,
};
