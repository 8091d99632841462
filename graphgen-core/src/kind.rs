//! Graph kinds and random edge distributions.

use std::fmt;

use crate::sampler::{pair_count, partition_sizes};

/// Policy used to spread random edges over the vertex set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Distribution {
    /// Every pair of vertices is equally likely.
    Uniform,
    /// Half the edges fall inside the first tenth of the vertices, the rest
    /// inside the remaining vertices.
    Tiered,
}

impl Distribution {
    /// Returns the canonical descriptor keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "UNIFORM",
            Self::Tiered => "TIERED",
        }
    }

    /// Returns the largest edge count this distribution can place on
    /// `vertices` vertices, or `None` when that count does not fit in
    /// `usize`.
    ///
    /// Tiered requests split into `k / 2` low and `k - k / 2` high edges, so
    /// with pool sizes `a` and `b` the limit is `2a + 1` when `b > a` and
    /// `2b` otherwise.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::Distribution;
    ///
    /// assert_eq!(Distribution::Uniform.max_edges(5), Some(10));
    /// assert_eq!(Distribution::Tiered.max_edges(5), Some(1));
    /// assert_eq!(Distribution::Tiered.max_edges(30), Some(7));
    /// assert_eq!(Distribution::Uniform.max_edges(usize::MAX), None);
    /// ```
    #[must_use]
    pub const fn max_edges(self, vertices: usize) -> Option<usize> {
        match self {
            Self::Uniform => pair_count(vertices),
            Self::Tiered => {
                let Some((low, high)) = partition_sizes(vertices) else {
                    return None;
                };
                if high <= low {
                    return high.checked_mul(2);
                }
                let Some(doubled) = low.checked_mul(2) else {
                    return None;
                };
                doubled.checked_add(1)
            }
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of graph to generate, together with its parameters.
///
/// # Examples
/// ```
/// use graphgen_core::{Distribution, GraphKind};
///
/// let kind = GraphKind::Random {
///     vertices: 10,
///     edges: 4,
///     distribution: Distribution::Uniform,
/// };
/// assert_eq!(kind.vertex_count(), 10);
/// assert_eq!(kind.to_string(), "RANDOM 10 UNIFORM 4");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphKind {
    /// The complete graph on `vertices` vertices.
    Complete {
        /// Number of vertices.
        vertices: usize,
    },
    /// A single ring through `vertices` vertices.
    Cycle {
        /// Number of vertices.
        vertices: usize,
    },
    /// A graph with `edges` distinct random edges.
    Random {
        /// Number of vertices.
        vertices: usize,
        /// Number of distinct undirected edges to place.
        edges: usize,
        /// How the edges are spread over the vertices.
        distribution: Distribution,
    },
}

impl GraphKind {
    /// Returns the number of vertices the graph will hold.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        match *self {
            Self::Complete { vertices }
            | Self::Cycle { vertices }
            | Self::Random { vertices, .. } => vertices,
        }
    }

    /// Returns the lowercase label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Complete { .. } => "complete",
            Self::Cycle { .. } => "cycle",
            Self::Random { .. } => "random",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete { vertices } => write!(f, "COMPLETE {vertices}"),
            Self::Cycle { vertices } => write!(f, "CYCLE {vertices}"),
            Self::Random {
                vertices,
                edges,
                distribution,
            } => write!(f, "RANDOM {vertices} {distribution} {edges}"),
        }
    }
}
