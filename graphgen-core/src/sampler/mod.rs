//! Random edge sampling without replacement.
//!
//! Uniform sampling draws every edge from the complete candidate set. Tiered
//! sampling splits the request in half: `k / 2` edges come from the pool of
//! pairs inside the first tenth of the vertices and the remainder from the
//! pool of pairs inside the rest. Requests are checked against the pool
//! sizes before any candidate is enumerated.

mod candidates;
mod pool;

use std::{collections::BTreeSet, fmt};

use rand::Rng;
use tracing::{debug, instrument};

pub use self::{
    candidates::{
        Edge, PartitionedCandidates, all_edges, pair_count, partition_cutoff, partition_sizes,
        partitioned_edges,
    },
    pool::CandidatePool,
};
use crate::{Result, error::GraphError};

/// Sampled edges in lexicographic `(source, target)` order.
pub type SampledEdges = BTreeSet<Edge>;

/// Identifies the candidate pool an edge request was served from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PoolKind {
    /// Every pair of vertices.
    All,
    /// Pairs inside the low partition.
    Low,
    /// Pairs inside the high partition.
    High,
}

impl PoolKind {
    /// Returns the lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all-pairs",
            Self::Low => "low-partition",
            Self::High => "high-partition",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks `edge_count` distinct edges uniformly from all pairs of
/// `vertices` vertices.
///
/// # Errors
/// Returns [`GraphError::InsufficientCandidates`] when `edge_count` exceeds
/// `vertices * (vertices - 1) / 2`, and
/// [`GraphError::CandidateSetTooLarge`] when that many pairs cannot be
/// counted or held in memory.
///
/// # Examples
/// ```
/// use graphgen_core::sampler::sample_uniform;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let edges = sample_uniform(5, 4, &mut rng)?;
/// assert_eq!(edges.len(), 4);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[instrument(name = "sampler.uniform", level = "debug", err, skip(rng))]
pub fn sample_uniform<R: Rng + ?Sized>(
    vertices: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<SampledEdges> {
    let available = pair_count(vertices).ok_or(GraphError::CandidateSetTooLarge { vertices })?;
    check_request(PoolKind::All, edge_count, available)?;
    let mut pool = CandidatePool::new(PoolKind::All, all_edges(vertices)?);
    let mut sampled = SampledEdges::new();
    pool.draw_into(edge_count, rng, &mut sampled)?;
    debug!(sampled = sampled.len(), remaining = pool.len(), "uniform sampling complete");
    Ok(sampled)
}

/// Picks `edge_count / 2` edges from the low partition and the rest from the
/// high partition.
///
/// # Errors
/// Returns [`GraphError::InsufficientCandidates`] naming the first pool that
/// cannot satisfy its share. Nothing is drawn in that case.
/// [`GraphError::CandidateSetTooLarge`] is returned when either pool cannot
/// be counted or held in memory.
///
/// # Examples
/// ```
/// use graphgen_core::sampler::{partition_cutoff, sample_tiered};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(9);
/// let edges = sample_tiered(40, 5, &mut rng)?;
/// let cutoff = partition_cutoff(40);
/// let low = edges.iter().filter(|edge| edge.target() <= cutoff).count();
/// assert_eq!((low, edges.len() - low), (2, 3));
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[instrument(name = "sampler.tiered", level = "debug", err, skip(rng))]
#[expect(
    clippy::integer_division,
    reason = "the low partition receives the floor of half the request"
)]
pub fn sample_tiered<R: Rng + ?Sized>(
    vertices: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<SampledEdges> {
    let low_share = edge_count / 2;
    let high_share = edge_count - low_share;
    let (low_size, high_size) =
        partition_sizes(vertices).ok_or(GraphError::CandidateSetTooLarge { vertices })?;
    check_request(PoolKind::Low, low_share, low_size)?;
    check_request(PoolKind::High, high_share, high_size)?;

    let PartitionedCandidates { low, high } = partitioned_edges(vertices)?;
    let mut sampled = SampledEdges::new();
    CandidatePool::new(PoolKind::Low, low).draw_into(low_share, rng, &mut sampled)?;
    CandidatePool::new(PoolKind::High, high).draw_into(high_share, rng, &mut sampled)?;
    debug!(low_share, high_share, "tiered sampling complete");
    Ok(sampled)
}

const fn check_request(pool: PoolKind, requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(GraphError::InsufficientCandidates {
            pool,
            requested,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::Distribution;

    #[rstest]
    #[case(0, 0)]
    #[case(5, 0)]
    #[case(5, 10)]
    #[case(12, 30)]
    fn uniform_returns_requested_number_of_distinct_pairs(
        #[case] vertices: usize,
        #[case] edge_count: usize,
    ) {
        let mut rng = SmallRng::seed_from_u64(42);
        let edges = sample_uniform(vertices, edge_count, &mut rng).expect("request fits");
        assert_eq!(edges.len(), edge_count);
        assert!(edges.iter().all(|edge| {
            1 <= edge.source() && edge.source() < edge.target() && edge.target() <= vertices
        }));
    }

    #[test]
    fn uniform_rejects_requests_beyond_complete_graph() {
        let mut rng = SmallRng::seed_from_u64(42);
        let err = sample_uniform(4, 7, &mut rng).expect_err("K4 has six edges");
        assert_eq!(
            err,
            GraphError::InsufficientCandidates {
                pool: PoolKind::All,
                requested: 7,
                available: 6,
            }
        );
    }

    #[rstest]
    #[case::low_pool_empty(5, 2, PoolKind::Low, 1, 0)]
    #[case::low_pool_small(20, 4, PoolKind::Low, 2, 1)]
    #[case::high_pool_empty(1, 1, PoolKind::High, 1, 0)]
    fn tiered_names_the_exhausted_pool(
        #[case] vertices: usize,
        #[case] edge_count: usize,
        #[case] pool: PoolKind,
        #[case] requested: usize,
        #[case] available: usize,
    ) {
        let mut rng = SmallRng::seed_from_u64(42);
        let err = sample_tiered(vertices, edge_count, &mut rng).expect_err("request too large");
        assert_eq!(
            err,
            GraphError::InsufficientCandidates {
                pool,
                requested,
                available,
            }
        );
    }

    #[test]
    fn tiered_splits_floor_low_and_remainder_high() {
        let mut rng = SmallRng::seed_from_u64(8);
        let vertices = 50;
        let cutoff = partition_cutoff(vertices);
        let edges = sample_tiered(vertices, 21, &mut rng).expect("request fits");
        let low = edges.iter().filter(|edge| edge.target() <= cutoff).count();
        let high = edges.iter().filter(|edge| edge.source() >= cutoff).count();
        assert_eq!((low, high), (10, 11));
    }

    #[test]
    fn same_seed_reproduces_the_same_sample() {
        let first = sample_uniform(30, 40, &mut SmallRng::seed_from_u64(99)).expect("fits");
        let second = sample_uniform(30, 40, &mut SmallRng::seed_from_u64(99)).expect("fits");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case::uniform(Distribution::Uniform)]
    #[case::tiered(Distribution::Tiered)]
    fn huge_vertex_counts_fail_instead_of_allocating(#[case] distribution: Distribution) {
        let vertices = usize::MAX >> 2;
        let mut rng = SmallRng::seed_from_u64(1);
        let result = match distribution {
            Distribution::Uniform => sample_uniform(vertices, 3, &mut rng),
            Distribution::Tiered => sample_tiered(vertices, 3, &mut rng),
        };
        assert_eq!(result, Err(GraphError::CandidateSetTooLarge { vertices }));
    }
}
