//! Support library for the `graphgen` binary.
//!
//! Exposes command execution and logging setup so tests can drive the
//! command pipeline in-process.

pub mod cli;
pub mod logging;
