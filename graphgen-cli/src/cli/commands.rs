//! Command implementations and argument parsing for the graphgen CLI.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum, builder::RangedU64ValueParser};
use graphgen_core::{
    AdjacencyGraph, DescriptorError, Distribution, FormatError, GeneratorBuilder, GraphError,
    GraphKind, parse_descriptor, parse_document,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    version,
    about = "Generate synthetic graphs as adjacency documents."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate the graph named by a descriptor file.
    Generate(GenerateCommand),
    /// Generate the complete graph on N vertices.
    Complete(SizeCommand),
    /// Generate a single ring through N vertices.
    Cycle(SizeCommand),
    /// Generate a graph with K random edges.
    Random(RandomCommand),
    /// Parse an adjacency document and report its size.
    Verify(VerifyCommand),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::Complete(_) => "complete",
            Self::Cycle(_) => "cycle",
            Self::Random(_) => "random",
            Self::Verify(_) => "verify",
        }
    }
}

/// Options shared by every generating command.
#[derive(Debug, Args, Clone, Default)]
pub struct GraphOptions {
    /// Write the document to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Seed for the random number source. Drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// File holding a descriptor such as `RANDOM 100 TIERED 40`.
    pub descriptor: PathBuf,

    /// Output and seeding options.
    #[command(flatten)]
    pub options: GraphOptions,
}

/// Options accepted by the `complete` and `cycle` commands.
#[derive(Debug, Args, Clone)]
pub struct SizeCommand {
    /// Number of vertices.
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub vertices: usize,

    /// Output and seeding options.
    #[command(flatten)]
    pub options: GraphOptions,
}

/// Options accepted by the `random` command.
#[derive(Debug, Args, Clone)]
pub struct RandomCommand {
    /// Number of vertices.
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub vertices: usize,

    /// Number of distinct undirected edges to place.
    #[arg(long)]
    pub edges: usize,

    /// How edges are spread over the vertices.
    #[arg(long, value_enum, default_value_t = DistributionArg::Uniform)]
    pub distribution: DistributionArg,

    /// Output and seeding options.
    #[command(flatten)]
    pub options: GraphOptions,
}

/// Options accepted by the `verify` command.
#[derive(Debug, Args, Clone)]
pub struct VerifyCommand {
    /// Adjacency document to check.
    pub document: PathBuf,
}

/// Edge distributions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionArg {
    /// Every vertex pair is equally likely.
    Uniform,
    /// Half the edges among the first tenth of the vertices.
    Tiered,
}

impl From<DistributionArg> for Distribution {
    fn from(value: DistributionArg) -> Self {
        match value {
            DistributionArg::Uniform => Self::Uniform,
            DistributionArg::Tiered => Self::Tiered,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("failed to read `{path}`: {source}")]
    Read {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the output document failed.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The descriptor file could not be parsed.
    #[error("invalid descriptor in `{path}`: {source}")]
    Descriptor {
        /// Descriptor file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: DescriptorError,
    },
    /// The adjacency document is inconsistent.
    #[error("invalid document `{path}`: {source}")]
    Document {
        /// Document file.
        path: PathBuf,
        /// First inconsistency found.
        #[source]
        source: FormatError,
    },
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Read { .. } | Self::Write { .. } => None,
            Self::Descriptor { source, .. } => Some(source.code().as_str()),
            Self::Document { source, .. } => Some(source.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A graph was generated.
    Generated {
        /// What was generated.
        kind: GraphKind,
        /// Seed that reproduces the graph.
        seed: u64,
        /// The generated graph.
        graph: AdjacencyGraph,
        /// File the document was written to; `None` means stdout.
        output: Option<PathBuf>,
    },
    /// A document parsed cleanly.
    Verified {
        /// Number of vertices in the document.
        vertices: usize,
        /// Number of adjacency entries across all blocks.
        adjacency_entries: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// Documents bound for a file are written before this returns; documents
/// bound for stdout are left to [`render_outcome`].
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or parsed, the graph
/// cannot be built, or the output cannot be written.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::{Cli, Command, GraphOptions, Outcome, SizeCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Complete(SizeCommand {
///         vertices: 3,
///         options: GraphOptions::default(),
///     }),
/// };
/// match run_cli(cli)? {
///     Outcome::Generated { graph, .. } => {
///         assert_eq!(graph.serialize(), "3\n5\n7\n9\n2\n3\n1\n3\n1\n2");
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// # Ok::<(), graphgen_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Outcome, CliError> {
    Span::current().record("command", cli.command.label());
    match cli.command {
        Command::Generate(GenerateCommand {
            descriptor,
            options,
        }) => {
            let kind = read_descriptor(&descriptor)?;
            execute(&kind, options)
        }
        Command::Complete(SizeCommand { vertices, options }) => {
            execute(&GraphKind::Complete { vertices }, options)
        }
        Command::Cycle(SizeCommand { vertices, options }) => {
            execute(&GraphKind::Cycle { vertices }, options)
        }
        Command::Random(RandomCommand {
            vertices,
            edges,
            distribution,
            options,
        }) => execute(
            &GraphKind::Random {
                vertices,
                edges,
                distribution: distribution.into(),
            },
            options,
        ),
        Command::Verify(VerifyCommand { document }) => verify(&document),
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(kind, options),
    fields(descriptor = %kind, seed = field::Empty),
)]
pub(super) fn execute(kind: &GraphKind, options: GraphOptions) -> Result<Outcome, CliError> {
    let mut generator = GeneratorBuilder::new()
        .with_optional_seed(options.seed)
        .build();
    let seed = generator.seed();
    Span::current().record("seed", seed);

    let graph = generator.generate(kind)?;
    if let Some(path) = &options.output {
        write_document(&graph, path)?;
    }

    info!(
        vertices = graph.vertex_count(),
        adjacency_entries = graph.adjacency_entry_count(),
        seed,
        "command completed"
    );
    Ok(Outcome::Generated {
        kind: *kind,
        seed,
        graph,
        output: options.output,
    })
}

#[instrument(name = "cli.read_descriptor", err, skip(path), fields(path = %path.display()))]
pub(super) fn read_descriptor(path: &Path) -> Result<GraphKind, CliError> {
    let text = read_text(path)?;
    parse_descriptor(&text).map_err(|source| CliError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(
    name = "cli.write_document",
    err,
    skip(graph, path),
    fields(path = %path.display(), vertices = graph.vertex_count()),
)]
pub(super) fn write_document(graph: &AdjacencyGraph, path: &Path) -> Result<(), CliError> {
    let write_error = |source: io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    graph.write_document(&mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)
}

#[instrument(name = "cli.verify", err, skip(path), fields(path = %path.display()))]
pub(super) fn verify(path: &Path) -> Result<Outcome, CliError> {
    let text = read_text(path)?;
    let graph = parse_document(&text).map_err(|source| CliError::Document {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        vertices = graph.vertex_count(),
        adjacency_entries = graph.adjacency_entry_count(),
        "document verified"
    );
    Ok(Outcome::Verified {
        vertices: graph.vertex_count(),
        adjacency_entries: graph.adjacency_entry_count(),
    })
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `outcome` to `writer`.
///
/// Generated graphs without an output file are written as the adjacency
/// document, with no trailing newline. Verification prints a short summary.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphgen_cli::cli::{Outcome, render_outcome};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let outcome = Outcome::Verified { vertices: 3, adjacency_entries: 6 };
/// let mut buffer = Vec::new();
/// render_outcome(&outcome, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "vertices: 3\nadjacency entries: 6\n");
/// # Ok(())
/// # }
/// ```
pub fn render_outcome(outcome: &Outcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Generated {
            graph,
            output: None,
            ..
        } => graph.write_document(&mut writer),
        Outcome::Generated { output: Some(_), .. } => Ok(()),
        Outcome::Verified {
            vertices,
            adjacency_entries,
        } => {
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "adjacency entries: {adjacency_entries}")
        }
    }
}
