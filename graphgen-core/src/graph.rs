//! Adjacency-list graph storage.
//!
//! Vertices live in a single arena indexed by `id - 1`; adjacency entries
//! are arena indices, so the graph owns every vertex exactly once and no
//! vertex holds a reference to another.

use std::{fmt, io};

use crate::{Result, codec, error::GraphError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Vertex {
    adjacency: Vec<usize>,
}

/// A graph stored as one ordered adjacency list per vertex.
///
/// Vertex identifiers are 1-based and dense: a graph with `n` vertices holds
/// exactly the identifiers `1..=n`. Edges are directed at this level; the
/// builders insert both directions for every logical edge.
///
/// # Examples
/// ```
/// use graphgen_core::AdjacencyGraph;
///
/// let mut graph = AdjacencyGraph::with_vertices(2);
/// graph.add_edge(1, 2)?;
/// graph.add_edge(2, 1)?;
/// assert_eq!(graph.serialize(), "2\n4\n5\n2\n1");
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    vertices: Vec<Vertex>,
    entries: usize,
}

impl AdjacencyGraph {
    /// Creates a graph with no vertices.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            entries: 0,
        }
    }

    /// Creates a graph holding vertices `1..=count`, all with empty adjacency
    /// lists.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::with_vertices(3);
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.adjacency_entry_count(), 0);
    /// ```
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); count],
            entries: 0,
        }
    }

    /// Appends vertex `id` with an empty adjacency list.
    ///
    /// # Errors
    /// Returns [`GraphError::NonSequentialVertex`] unless `id` is exactly one
    /// greater than the current vertex count.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{AdjacencyGraph, GraphError};
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// graph.add_vertex(1)?;
    /// let err = graph.add_vertex(3).expect_err("vertex 2 is missing");
    /// assert_eq!(err, GraphError::NonSequentialVertex { expected: 2, got: 3 });
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn add_vertex(&mut self, id: usize) -> Result<()> {
        let expected = self.vertices.len().saturating_add(1);
        if id != expected {
            return Err(GraphError::NonSequentialVertex { expected, got: id });
        }
        self.vertices.push(Vertex::default());
        Ok(())
    }

    /// Appends `target` to the adjacency list of `source`.
    ///
    /// The edge is directed; callers wanting an undirected edge insert both
    /// directions.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint has not
    /// been added. The graph is left unchanged in that case.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
        let target_index = self.index_of(target)?;
        let vertex_count = self.vertices.len();
        let vertex = source
            .checked_sub(1)
            .and_then(|index| self.vertices.get_mut(index))
            .ok_or(GraphError::VertexOutOfRange {
                vertex: source,
                vertex_count,
            })?;
        vertex.adjacency.push(target_index);
        self.entries += 1;
        Ok(())
    }

    fn index_of(&self, id: usize) -> Result<usize> {
        id.checked_sub(1)
            .filter(|index| *index < self.vertices.len())
            .ok_or(GraphError::VertexOutOfRange {
                vertex: id,
                vertex_count: self.vertices.len(),
            })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Returns the total number of directed adjacency entries.
    #[must_use]
    #[rustfmt::skip]
    pub const fn adjacency_entry_count(&self) -> usize { self.entries }

    /// Returns `true` when the graph holds no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Returns the neighbours of `id` in insertion order, or `None` when the
    /// vertex does not exist.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::AdjacencyGraph;
    ///
    /// let mut graph = AdjacencyGraph::with_vertices(3);
    /// graph.add_edge(1, 3)?;
    /// graph.add_edge(1, 2)?;
    /// let neighbours: Vec<usize> = graph.neighbours(1).into_iter().flatten().collect();
    /// assert_eq!(neighbours, vec![3, 2]);
    /// assert!(graph.neighbours(4).is_none());
    /// # Ok::<(), graphgen_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn neighbours(&self, id: usize) -> Option<impl ExactSizeIterator<Item = usize> + '_> {
        let vertex = id.checked_sub(1).and_then(|index| self.vertices.get(index))?;
        Some(ids(&vertex.adjacency))
    }

    /// Returns the out-degree of `id`, or `None` when the vertex does not
    /// exist.
    #[must_use]
    pub fn degree(&self, id: usize) -> Option<usize> {
        id.checked_sub(1)
            .and_then(|index| self.vertices.get(index))
            .map(|vertex| vertex.adjacency.len())
    }

    /// Iterates over `(id, neighbours)` pairs in identifier order.
    pub fn vertices(
        &self,
    ) -> impl Iterator<Item = (usize, impl ExactSizeIterator<Item = usize> + '_)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (index + 1, ids(&vertex.adjacency)))
    }

    /// Adjacency lists as arena indices, in identifier order.
    pub(crate) fn adjacency_lists(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.vertices.iter().map(|vertex| vertex.adjacency.as_slice())
    }

    /// Renders the graph in the adjacency document format.
    ///
    /// Runs in time linear in the vertex count plus the adjacency entry
    /// count. The document carries no trailing newline.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::with_vertices(2);
    /// assert_eq!(graph.serialize(), "2\n4\n5\nnull\nnull");
    /// ```
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Streams the adjacency document into `writer` without buffering it in
    /// memory first.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn write_document<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_document(self, f)
    }
}

fn ids(adjacency: &[usize]) -> impl ExactSizeIterator<Item = usize> + '_ {
    adjacency.iter().map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero(0)]
    #[case::missing_vertex(3)]
    fn add_edge_rejects_unknown_endpoints(#[case] missing: usize) {
        let mut graph = AdjacencyGraph::with_vertices(2);
        let err = graph
            .add_edge(1, missing)
            .expect_err("edge to a missing vertex must fail");
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: missing,
                vertex_count: 2,
            }
        );
        let err = graph
            .add_edge(missing, 1)
            .expect_err("edge from a missing vertex must fail");
        assert!(matches!(err, GraphError::VertexOutOfRange { .. }));
        assert_eq!(graph.adjacency_entry_count(), 0);
    }

    #[test]
    fn add_vertex_requires_dense_identifiers() {
        let mut graph = AdjacencyGraph::new();
        assert!(graph.is_empty());
        let err = graph.add_vertex(0).expect_err("identifiers start at 1");
        assert_eq!(err, GraphError::NonSequentialVertex { expected: 1, got: 0 });
        assert!(graph.is_empty());
        graph.add_vertex(1).expect("first vertex");
        graph.add_vertex(2).expect("second vertex");
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.is_empty());
    }

    #[test]
    fn edges_keep_insertion_order_and_allow_duplicates() {
        let mut graph = AdjacencyGraph::with_vertices(3);
        for target in [3, 1, 3, 2] {
            graph.add_edge(1, target).expect("endpoints exist");
        }
        let neighbours: Vec<usize> = graph.neighbours(1).expect("vertex 1").collect();
        assert_eq!(neighbours, vec![3, 1, 3, 2]);
        assert_eq!(graph.degree(1), Some(4));
        assert_eq!(graph.degree(2), Some(0));
        assert_eq!(graph.degree(4), None);
        assert_eq!(graph.adjacency_entry_count(), 4);
    }

    #[test]
    fn vertices_iterates_in_identifier_order() {
        let mut graph = AdjacencyGraph::with_vertices(2);
        graph.add_edge(2, 1).expect("endpoints exist");
        let listed: Vec<(usize, Vec<usize>)> = graph
            .vertices()
            .map(|(id, neighbours)| (id, neighbours.collect()))
            .collect();
        assert_eq!(listed, vec![(1, vec![]), (2, vec![1])]);
    }

    #[test]
    fn write_document_matches_serialize() {
        let mut graph = AdjacencyGraph::with_vertices(3);
        graph.add_edge(2, 3).expect("endpoints exist");
        graph.add_edge(3, 2).expect("endpoints exist");
        let mut buffer = Vec::new();
        graph
            .write_document(&mut buffer)
            .expect("writing to a vector succeeds");
        assert_eq!(String::from_utf8(buffer).expect("utf-8"), graph.serialize());
    }
}
