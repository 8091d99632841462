//! Candidate edge enumeration for random graph generation.

use std::fmt;

use crate::{Result, error::GraphError};

/// An undirected edge candidate with `source < target`.
///
/// Ordering is lexicographic on `(source, target)`, which fixes the order in
/// which sampled edges are inserted into a graph.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the lower endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the higher endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Candidate pools produced by [`partitioned_edges`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PartitionedCandidates {
    /// Edges whose endpoints both lie at or below the cutoff.
    pub low: Vec<Edge>,
    /// Edges whose endpoints both lie at or above the cutoff.
    pub high: Vec<Edge>,
}

/// Number of distinct undirected edges among `vertices` vertices, or `None`
/// when the count does not fit in `usize`.
///
/// Whichever of `n` and `n - 1` is even is halved before multiplying, so the
/// result is exact right up to the overflow boundary.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "one of two consecutive integers is even so the halving is exact"
)]
pub const fn pair_count(vertices: usize) -> Option<usize> {
    let below = vertices.saturating_sub(1);
    if vertices % 2 == 0 {
        (vertices / 2).checked_mul(below)
    } else {
        vertices.checked_mul(below / 2)
    }
}

/// Highest vertex identifier of the low partition: the first tenth of the
/// vertices, rounded down.
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "the low partition is the floor of one tenth of the vertices"
)]
pub const fn partition_cutoff(vertices: usize) -> usize {
    vertices / 10
}

/// Sizes of the `(low, high)` pools [`partitioned_edges`] would produce,
/// computed without enumerating them. `None` when either size overflows.
///
/// Vertex `cutoff` belongs to both partitions. When the cutoff is zero the
/// low pool is empty and the high partition spans every vertex.
#[must_use]
pub const fn partition_sizes(vertices: usize) -> Option<(usize, usize)> {
    let cutoff = partition_cutoff(vertices);
    let high_start = if cutoff == 0 { 1 } else { cutoff };
    let high_vertices = vertices.saturating_sub(high_start) + if vertices == 0 { 0 } else { 1 };
    match (pair_count(cutoff), pair_count(high_vertices)) {
        (Some(low), Some(high)) => Some((low, high)),
        _ => None,
    }
}

fn reserve(vertices: usize, size: usize) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    edges
        .try_reserve_exact(size)
        .map_err(|_| GraphError::CandidateSetTooLarge { vertices })?;
    Ok(edges)
}

/// Enumerates every pair `(i, j)` with `1 <= i < j <= vertices` in
/// lexicographic order.
///
/// # Errors
/// Returns [`GraphError::CandidateSetTooLarge`] when the pairs cannot be
/// counted in a `usize` or allocated.
///
/// # Examples
/// ```
/// use graphgen_core::sampler::{Edge, all_edges};
///
/// assert_eq!(
///     all_edges(3)?,
///     vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 3)],
/// );
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn all_edges(vertices: usize) -> Result<Vec<Edge>> {
    let size = pair_count(vertices).ok_or(GraphError::CandidateSetTooLarge { vertices })?;
    let mut edges = reserve(vertices, size)?;
    for source in 1..=vertices {
        for target in source + 1..=vertices {
            edges.push(Edge::new(source, target));
        }
    }
    Ok(edges)
}

/// Splits the complete edge set into the low and high partitions used by
/// tiered sampling.
///
/// With `cutoff = vertices / 10`, the low pool holds pairs whose endpoints
/// are both `<= cutoff` and the high pool holds pairs whose endpoints are
/// both `>= cutoff`. Both pools are in lexicographic order.
///
/// # Errors
/// Returns [`GraphError::CandidateSetTooLarge`] when either pool cannot be
/// counted in a `usize` or allocated.
///
/// # Examples
/// ```
/// use graphgen_core::sampler::{Edge, partitioned_edges};
///
/// let pools = partitioned_edges(20)?;
/// assert_eq!(pools.low, vec![Edge::new(1, 2)]);
/// assert_eq!(pools.high.first(), Some(&Edge::new(2, 3)));
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn partitioned_edges(vertices: usize) -> Result<PartitionedCandidates> {
    let cutoff = partition_cutoff(vertices);
    let (low_size, high_size) =
        partition_sizes(vertices).ok_or(GraphError::CandidateSetTooLarge { vertices })?;
    let mut pools = PartitionedCandidates {
        low: reserve(vertices, low_size)?,
        high: reserve(vertices, high_size)?,
    };
    for source in 1..=vertices {
        for target in source + 1..=vertices {
            if target <= cutoff {
                pools.low.push(Edge::new(source, target));
            }
            if source >= cutoff {
                pools.high.push(Edge::new(source, target));
            }
        }
    }
    Ok(pools)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(5, 10)]
    #[case(100, 4_950)]
    fn all_edges_enumerates_every_pair(#[case] vertices: usize, #[case] expected: usize) {
        let edges = all_edges(vertices).expect("small candidate sets fit in memory");
        assert_eq!(edges.len(), expected);
        assert_eq!(pair_count(vertices), Some(expected));
        assert!(edges.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(edges.iter().all(|edge| edge.source() < edge.target()));
    }

    #[rstest]
    #[case::below_ten(9, 0, 36)]
    #[case::ten(10, 0, 45)]
    #[case::twenty(20, 1, 171)]
    #[case::thirty(30, 3, 378)]
    fn partition_sizes_match_enumeration(
        #[case] vertices: usize,
        #[case] low: usize,
        #[case] high: usize,
    ) {
        let pools = partitioned_edges(vertices).expect("small candidate sets fit in memory");
        assert_eq!((pools.low.len(), pools.high.len()), (low, high));
        assert_eq!(partition_sizes(vertices), Some((low, high)));
    }

    #[test]
    fn boundary_vertex_appears_in_both_pools() {
        let pools = partitioned_edges(30).expect("small candidate sets fit in memory");
        let cutoff = partition_cutoff(30);
        assert!(
            pools
                .low
                .iter()
                .any(|edge| edge.target() == cutoff)
        );
        assert!(
            pools
                .high
                .iter()
                .any(|edge| edge.source() == cutoff)
        );
        assert!(pools.low.iter().all(|edge| !pools.high.contains(edge)));
    }

    #[rstest]
    #[case::largest_even(
        1_usize << (usize::BITS >> 1),
        Some((1_usize << (usize::BITS - 1)) - (1_usize << ((usize::BITS >> 1) - 1))),
    )]
    #[case::odd(7, Some(21))]
    #[case::overflowing(usize::MAX >> 2, None)]
    #[case::max(usize::MAX, None)]
    fn pair_count_is_exact_until_it_overflows(
        #[case] vertices: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(pair_count(vertices), expected);
    }

    #[rstest]
    #[case::quarter_of_the_range(usize::MAX >> 2)]
    #[case::half_of_the_range(usize::MAX >> 1)]
    fn oversized_candidate_sets_are_rejected_before_allocating(#[case] vertices: usize) {
        assert_eq!(
            all_edges(vertices),
            Err(GraphError::CandidateSetTooLarge { vertices })
        );
        assert_eq!(partition_sizes(vertices), None);
        assert_eq!(
            partitioned_edges(vertices),
            Err(GraphError::CandidateSetTooLarge { vertices })
        );
    }

    #[test]
    fn countable_but_unallocatable_sets_are_rejected() {
        let vertices = 1_usize << (usize::BITS >> 1);
        assert!(pair_count(vertices).is_some());
        assert_eq!(
            all_edges(vertices),
            Err(GraphError::CandidateSetTooLarge { vertices })
        );
    }

    #[test]
    fn edges_display_as_ordered_pairs() {
        assert_eq!(Edge::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Edge::new(3, 10).to_string(), "(3, 10)");
    }
}
