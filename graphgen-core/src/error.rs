//! Error types for the graphgen core library.
//!
//! Defines error enums exposed by the public API, their stable codes, and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::sampler::PoolKind;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error raised while constructing an [`crate::AdjacencyGraph`].
///
/// Construction is all-or-nothing: whenever one of these is returned no
/// graph is handed back to the caller.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex that has not been added.
    #[error("vertex {vertex} is outside the graph's range 1..={vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex identifier.
        vertex: usize,
        /// Number of vertices present when the edge was inserted.
        vertex_count: usize,
    },
    /// Vertices must be added with consecutive identifiers starting at 1.
    #[error("vertex {got} added out of order; expected vertex {expected}")]
    NonSequentialVertex {
        /// Identifier the graph expected next.
        expected: usize,
        /// Identifier supplied by the caller.
        got: usize,
    },
    /// More edges were requested than the candidate pool holds.
    #[error("requested {requested} edges from the {pool} pool but only {available} are available")]
    InsufficientCandidates {
        /// Candidate pool that could not satisfy the request.
        pool: PoolKind,
        /// Number of distinct edges requested from the pool.
        requested: usize,
        /// Number of distinct candidate edges the pool holds.
        available: usize,
    },
    /// The candidate edges of a graph this large cannot be held in memory.
    #[error("the candidate edges of a {vertices}-vertex graph do not fit in memory")]
    CandidateSetTooLarge {
        /// Vertex count whose candidate set was requested.
        vertices: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex that has not been added.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Vertices must be added with consecutive identifiers starting at 1.
        NonSequentialVertex => NonSequentialVertex { .. } => "GRAPH_NON_SEQUENTIAL_VERTEX",
        /// More edges were requested than the candidate pool holds.
        InsufficientCandidates => InsufficientCandidates { .. } => "GRAPH_INSUFFICIENT_CANDIDATES",
        /// The candidate edge set cannot be counted or allocated.
        CandidateSetTooLarge => CandidateSetTooLarge { .. } => "GRAPH_CANDIDATE_SET_TOO_LARGE",
    }
}

/// Error raised while parsing a graph descriptor.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DescriptorError {
    /// The descriptor ended before a required token.
    #[error("descriptor ended early; expected {expected}")]
    MissingToken {
        /// Human-readable name of the missing token.
        expected: &'static str,
    },
    /// The graph kind keyword was not recognised.
    #[error("unknown graph kind `{token}`; expected COMPLETE, CYCLE, or RANDOM")]
    UnknownGraphKind {
        /// The unrecognised token.
        token: String,
    },
    /// The distribution keyword was not recognised.
    #[error("unknown distribution `{token}`; expected UNIFORM or TIERED")]
    UnknownDistribution {
        /// The unrecognised token.
        token: String,
    },
    /// A numeric field did not hold a non-negative integer.
    #[error("{field} must be a non-negative integer (got `{token}`)")]
    InvalidInteger {
        /// Name of the numeric field.
        field: &'static str,
        /// The token that failed to parse.
        token: String,
    },
    /// Graphs must contain at least one vertex.
    #[error("vertex count must be at least 1")]
    ZeroVertices,
}

define_error_codes! {
    /// Stable codes describing [`DescriptorError`] variants.
    enum DescriptorErrorCode for DescriptorError {
        /// The descriptor ended before a required token.
        MissingToken => MissingToken { .. } => "DESCRIPTOR_MISSING_TOKEN",
        /// The graph kind keyword was not recognised.
        UnknownGraphKind => UnknownGraphKind { .. } => "DESCRIPTOR_UNKNOWN_GRAPH_KIND",
        /// The distribution keyword was not recognised.
        UnknownDistribution => UnknownDistribution { .. } => "DESCRIPTOR_UNKNOWN_DISTRIBUTION",
        /// A numeric field did not hold a non-negative integer.
        InvalidInteger => InvalidInteger { .. } => "DESCRIPTOR_INVALID_INTEGER",
        /// Graphs must contain at least one vertex.
        ZeroVertices => ZeroVertices => "DESCRIPTOR_ZERO_VERTICES",
    }
}

/// Error raised while parsing an adjacency document.
///
/// Line numbers are 1-based, matching the pointer convention of the format.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    /// The document contained no lines.
    #[error("document is empty")]
    Empty,
    /// A line did not hold the expected integer.
    #[error("line {line}: expected an integer, found `{token}`")]
    InvalidNumber {
        /// Line holding the malformed token.
        line: usize,
        /// The malformed token.
        token: String,
    },
    /// The document ended before a required line.
    #[error("document ended before line {line}")]
    MissingLine {
        /// First line that was required but absent.
        line: usize,
    },
    /// A vertex pointer did not index the start of its adjacency block.
    #[error("vertex {vertex} points at line {found}; expected line {expected}")]
    PointerMismatch {
        /// Vertex whose pointer is inconsistent.
        vertex: usize,
        /// Line at which the vertex's block must start.
        expected: usize,
        /// Line recorded in the pointer block.
        found: usize,
    },
    /// An adjacency entry named a vertex outside the document's range.
    #[error("line {line}: vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        /// Line holding the entry.
        line: usize,
        /// Vertex identifier found on the line.
        vertex: usize,
        /// Vertex count declared on line 1.
        vertex_count: usize,
    },
    /// Content followed the final adjacency block.
    #[error("unexpected content after the last adjacency block at line {line}")]
    TrailingLines {
        /// First line past the final block.
        line: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`FormatError`] variants.
    enum FormatErrorCode for FormatError {
        /// The document contained no lines.
        Empty => Empty => "FORMAT_EMPTY",
        /// A line did not hold the expected integer.
        InvalidNumber => InvalidNumber { .. } => "FORMAT_INVALID_NUMBER",
        /// The document ended before a required line.
        MissingLine => MissingLine { .. } => "FORMAT_MISSING_LINE",
        /// A vertex pointer did not index the start of its adjacency block.
        PointerMismatch => PointerMismatch { .. } => "FORMAT_POINTER_MISMATCH",
        /// An adjacency entry named a vertex outside the document's range.
        VertexOutOfRange => VertexOutOfRange { .. } => "FORMAT_VERTEX_OUT_OF_RANGE",
        /// Content followed the final adjacency block.
        TrailingLines => TrailingLines { .. } => "FORMAT_TRAILING_LINES",
    }
}

/// Convenient alias for results returned by graph construction.
pub type Result<T> = core::result::Result<T, GraphError>;
