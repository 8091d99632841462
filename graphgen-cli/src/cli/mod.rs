//! Command-line interface for generating and checking adjacency documents.
//!
//! Graphs are requested either through a descriptor file (`generate`) or
//! inline (`complete`, `cycle`, `random`). `verify` parses an existing
//! document and reports its size.

mod commands;

pub use commands::{
    Cli, CliError, Command, DistributionArg, GenerateCommand, GraphOptions, Outcome,
    RandomCommand, SizeCommand, VerifyCommand, render_outcome, run_cli,
};
