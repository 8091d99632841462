//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label and converts
//! into the [`GraphKind`] it measures.

use std::fmt;

use graphgen_core::{Distribution, GraphKind};

/// Parameters for a complete-graph or cycle benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct TopologyBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
}

impl fmt::Display for TopologyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

/// Parameters for a random-graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct RandomBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Requested edges per vertex; clamped to what the distribution allows.
    pub edges_per_vertex: usize,
    /// Edge distribution under test.
    pub distribution: Distribution,
}

impl RandomBenchParams {
    /// Returns the edge count requested from the generator.
    ///
    /// The request is left unclamped when the distribution's limit does not
    /// fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_benches::params::RandomBenchParams;
    /// use graphgen_core::Distribution;
    ///
    /// let params = RandomBenchParams {
    ///     vertex_count: 4,
    ///     edges_per_vertex: 8,
    ///     distribution: Distribution::Uniform,
    /// };
    /// assert_eq!(params.edge_count(), 6);
    /// ```
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        let requested = self.vertex_count.saturating_mul(self.edges_per_vertex);
        match self.distribution.max_edges(self.vertex_count) {
            Some(limit) if limit < requested => limit,
            _ => requested,
        }
    }

    /// Returns the graph kind this run generates.
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        GraphKind::Random {
            vertices: self.vertex_count,
            edges: self.edge_count(),
            distribution: self.distribution,
        }
    }
}

impl fmt::Display for RandomBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},k={}",
            self.distribution,
            self.vertex_count,
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::uniform(Distribution::Uniform, 100, 4, "UNIFORM,n=100,k=400")]
    #[case::tiered_clamped(Distribution::Tiered, 100, 8, "TIERED,n=100,k=91")]
    fn labels_show_the_effective_edge_count(
        #[case] distribution: Distribution,
        #[case] vertex_count: usize,
        #[case] edges_per_vertex: usize,
        #[case] expected: &str,
    ) {
        let params = RandomBenchParams {
            vertex_count,
            edges_per_vertex,
            distribution,
        };
        assert_eq!(params.to_string(), expected);
    }
}
