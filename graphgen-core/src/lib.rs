//! graphgen core library.
//!
//! Builds complete graphs, cycles, and random graphs and serializes them to
//! an adjacency document.
//!
//! # Document format
//!
//! Line 1 holds the vertex count `n`. Lines `2..=n + 1` hold, for each
//! vertex in identifier order, the 1-based line at which its adjacency block
//! starts. The blocks follow in vertex order: one neighbour identifier per
//! line, or a single `null` line for a vertex without neighbours. The
//! document has no trailing newline.
//!
//! ```
//! use graphgen_core::{GeneratorBuilder, GraphKind};
//!
//! let mut generator = GeneratorBuilder::new().with_seed(1).build();
//! let graph = generator.generate(&"COMPLETE 3".parse::<GraphKind>()?)?;
//! assert_eq!(graph.serialize(), "3\n5\n7\n9\n2\n3\n1\n3\n1\n2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod codec;
mod descriptor;
mod error;
mod generator;
mod graph;
mod kind;
pub mod sampler;
mod topology;

pub use crate::{
    builder::GeneratorBuilder,
    codec::parse_document,
    descriptor::parse_descriptor,
    error::{
        DescriptorError, DescriptorErrorCode, FormatError, FormatErrorCode, GraphError,
        GraphErrorCode, Result,
    },
    generator::GraphGenerator,
    graph::AdjacencyGraph,
    kind::{Distribution, GraphKind},
    topology::{complete_graph, cycle_graph, random_graph},
};
