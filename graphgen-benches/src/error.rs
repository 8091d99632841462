//! Benchmark setup error type.
//!
//! Lets setup code propagate library failures with `?` instead of
//! `.expect()`.

use graphgen_core::{FormatError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction failed.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// A serialized document did not parse back.
    #[error("document parsing failed: {0}")]
    Format(#[from] FormatError),
}
