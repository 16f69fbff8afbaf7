//! Command implementations and argument parsing for the zeroth CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use zeroth_core::{Barcode, Graph, RatioStrategy, ZerothBuilder, ZerothError};
use zeroth_providers_json::{JsonGraphError, JsonGraphSource};

/// Top-level CLI options parsed by [`clap`].
#[derive(Clone, Debug, Parser)]
#[command(name = "zeroth", about = "Compute the persistence barcode of a weighted graph.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Compute the barcode of a force-layout JSON graph document.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Clone, Debug, Args)]
pub struct RunCommand {
    /// Path to a force-layout JSON graph document.
    pub path: PathBuf,

    /// Strategy for the per-bar bipartition computation.
    #[arg(long = "ratio", value_enum, default_value = "traversal")]
    pub ratio: RatioArg,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Ratio strategies selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RatioArg {
    /// Re-merge the remaining forest edges for every bar.
    Replay,
    /// Walk the spanning forest once per bar.
    Traversal,
}

impl From<RatioArg> for RatioStrategy {
    fn from(arg: RatioArg) -> Self {
        match arg {
            RatioArg::Replay => Self::Replay,
            RatioArg::Traversal => Self::Traversal,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or parsing the graph document failed.
    #[error(transparent)]
    Provider(#[from] JsonGraphError),
    /// Barcode computation failed.
    #[error(transparent)]
    Core(#[from] ZerothError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug)]
pub struct ExecutionSummary {
    /// Name derived from the graph document.
    pub graph_name: String,
    /// The validated input graph.
    pub graph: Graph,
    /// The computed barcode.
    pub barcode: Barcode,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or computation fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, ratio = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, ratio, name } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("ratio", field::debug(ratio));

    let source = JsonGraphSource::try_from_path(&path)?;
    let graph_name = name.unwrap_or_else(|| source.name().to_owned());
    let graph = source.into_graph()?;

    let zeroth = ZerothBuilder::new()
        .with_ratio_strategy(ratio.into())
        .build();
    let barcode = zeroth.run(&graph)?;

    info!(
        graph = graph_name.as_str(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        bars = barcode.bars().len(),
        components = barcode.component_count(),
        "command completed"
    );

    Ok(ExecutionSummary {
        graph_name,
        graph,
        barcode,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Bars are listed in display order: death descending, then ratio
/// descending.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    writeln!(writer, "nodes: {}", summary.graph.node_count())?;
    writeln!(writer, "edges: {}", summary.graph.edge_count())?;
    writeln!(writer, "components: {}", summary.barcode.component_count())?;
    writeln!(writer, "bars: {}", summary.barcode.bars().len())?;

    for index in summary.barcode.display_order() {
        let bar = &summary.barcode.bars()[index];
        let (source, target) = summary
            .graph
            .edge(bar.edge())
            .map(|edge| (edge.source(), edge.target()))
            .unwrap_or(("?", "?"));
        writeln!(
            writer,
            "{:>10.3}  ratio {:.3}  {source} -- {target}  [{} | {}]",
            bar.death(),
            bar.ratio(),
            bar.component_a().len(),
            bar.component_b().len(),
        )?;
    }
    Ok(())
}
