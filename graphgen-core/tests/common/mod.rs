//! Shared helpers for graphgen-core integration tests.

use std::collections::BTreeSet;

use graphgen_core::AdjacencyGraph;

/// Collects every adjacency list in vertex order.
#[must_use]
pub fn adjacency(graph: &AdjacencyGraph) -> Vec<Vec<usize>> {
    graph
        .vertices()
        .map(|(_, neighbours)| neighbours.collect())
        .collect()
}

/// Collects the logical undirected edges as `(low, high)` pairs.
#[must_use]
pub fn undirected_edges(graph: &AdjacencyGraph) -> BTreeSet<(usize, usize)> {
    graph
        .vertices()
        .flat_map(|(id, neighbours)| neighbours.map(move |other| (id.min(other), id.max(other))))
        .collect()
}

/// Returns `true` when every directed entry has its reverse entry.
#[must_use]
pub fn is_symmetric(graph: &AdjacencyGraph) -> bool {
    graph.vertices().all(|(id, neighbours)| {
        neighbours.into_iter().all(|other| {
            graph
                .neighbours(other)
                .is_some_and(|mut back| back.any(|candidate| candidate == id))
        })
    })
}
