//! Construction strategies for complete, cycle, and random graphs.

use rand::Rng;

use crate::{
    AdjacencyGraph, Distribution, Result,
    sampler::{SampledEdges, sample_tiered, sample_uniform},
};

/// Builds the complete graph on `vertices` vertices.
///
/// Every vertex lists every other vertex in ascending order, so each has
/// degree `vertices - 1`.
///
/// # Errors
/// Propagates [`crate::GraphError`] from edge insertion; insertion never
/// fails for the identifiers generated here.
///
/// # Examples
/// ```
/// use graphgen_core::complete_graph;
///
/// let graph = complete_graph(3)?;
/// assert_eq!(graph.serialize(), "3\n5\n7\n9\n2\n3\n1\n3\n1\n2");
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn complete_graph(vertices: usize) -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::with_vertices(vertices);
    for source in 1..=vertices {
        for target in (1..=vertices).filter(|target| *target != source) {
            graph.add_edge(source, target)?;
        }
    }
    Ok(graph)
}

/// Builds a ring through vertices `1..=vertices`.
///
/// Each vertex lists the smaller of its two ring neighbours first. Small
/// inputs are not rejected: one vertex yields two self-references and two
/// vertices yield duplicated parallel entries.
///
/// # Errors
/// Propagates [`crate::GraphError`] from edge insertion; insertion never
/// fails for the identifiers generated here.
///
/// # Examples
/// ```
/// use graphgen_core::cycle_graph;
///
/// let graph = cycle_graph(4)?;
/// let first: Vec<usize> = graph.neighbours(1).into_iter().flatten().collect();
/// assert_eq!(first, vec![2, 4]);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn cycle_graph(vertices: usize) -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::with_vertices(vertices);
    for vertex in 1..=vertices {
        let (predecessor, successor) = ring_neighbours(vertex, vertices);
        graph.add_edge(vertex, predecessor.min(successor))?;
        graph.add_edge(vertex, predecessor.max(successor))?;
    }
    Ok(graph)
}

#[expect(
    clippy::integer_division_remainder_used,
    reason = "ring neighbours wrap around with modular arithmetic"
)]
const fn ring_neighbours(vertex: usize, vertices: usize) -> (usize, usize) {
    let predecessor = (vertex + vertices - 2) % vertices + 1;
    let successor = vertex % vertices + 1;
    (predecessor, successor)
}

/// Builds a graph on `vertices` vertices with `edges` distinct random
/// undirected edges.
///
/// Sampled edges are inserted in `(source, target)` order, each as
/// `source -> target` followed by `target -> source`.
///
/// # Errors
/// Returns [`crate::GraphError::InsufficientCandidates`] when the
/// distribution cannot supply `edges` distinct edges, or
/// [`crate::GraphError::CandidateSetTooLarge`] when the candidate pairs of
/// `vertices` vertices cannot be held in memory. No graph is built in either
/// case.
///
/// # Examples
/// ```
/// use graphgen_core::{Distribution, random_graph};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let graph = random_graph(5, 0, Distribution::Uniform, &mut rng)?;
/// assert_eq!(graph.serialize(), "5\n7\n8\n9\n10\n11\nnull\nnull\nnull\nnull\nnull");
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn random_graph<R: Rng + ?Sized>(
    vertices: usize,
    edges: usize,
    distribution: Distribution,
    rng: &mut R,
) -> Result<AdjacencyGraph> {
    let sampled = match distribution {
        Distribution::Uniform => sample_uniform(vertices, edges, rng)?,
        Distribution::Tiered => sample_tiered(vertices, edges, rng)?,
    };
    undirected_graph(vertices, &sampled)
}

fn undirected_graph(vertices: usize, edges: &SampledEdges) -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::with_vertices(vertices);
    for edge in edges {
        graph.add_edge(edge.source(), edge.target())?;
        graph.add_edge(edge.target(), edge.source())?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn adjacency(graph: &AdjacencyGraph) -> Vec<Vec<usize>> {
        graph
            .vertices()
            .map(|(_, neighbours)| neighbours.collect())
            .collect()
    }

    #[test]
    fn cycle_of_four_orders_neighbours_by_value() {
        let graph = cycle_graph(4).expect("cycle builds");
        assert_eq!(
            adjacency(&graph),
            vec![vec![2, 4], vec![1, 3], vec![2, 4], vec![1, 3]]
        );
    }

    #[rstest]
    #[case::single_vertex(1, vec![vec![1, 1]])]
    #[case::two_vertices(2, vec![vec![2, 2], vec![1, 1]])]
    #[case::empty(0, vec![])]
    fn cycle_keeps_degenerate_small_rings(
        #[case] vertices: usize,
        #[case] expected: Vec<Vec<usize>>,
    ) {
        let graph = cycle_graph(vertices).expect("cycle builds");
        assert_eq!(adjacency(&graph), expected);
    }

    #[test]
    fn complete_graph_on_one_vertex_has_no_edges() {
        let graph = complete_graph(1).expect("complete graph builds");
        assert_eq!(graph.serialize(), "1\n3\nnull");
    }

    #[rstest]
    #[case::no_edges(vec![])]
    #[case::path(vec![(1, 2), (2, 3)])]
    fn undirected_graph_inserts_both_directions(#[case] pairs: Vec<(usize, usize)>) {
        let edges: SampledEdges = pairs
            .iter()
            .map(|&(source, target)| crate::sampler::Edge::new(source, target))
            .collect();
        let graph = undirected_graph(3, &edges).expect("edges are in range");
        assert_eq!(graph.adjacency_entry_count(), pairs.len() * 2);
        for (source, target) in pairs {
            assert!(graph.neighbours(source).expect("source").any(|n| n == target));
            assert!(graph.neighbours(target).expect("target").any(|n| n == source));
        }
    }
}
