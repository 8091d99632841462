//! Benchmark support crate for graphgen.
//!
//! Provides parameter types and setup errors for the Criterion benchmarks
//! covering graph construction and document encoding.

pub mod error;
pub mod params;
