//! Adjacency document encoding and decoding.
//!
//! A document lists the vertex count, then one pointer line per vertex giving
//! the 1-based line at which its adjacency block starts, then every block in
//! vertex order. Empty blocks occupy a single `null` line.

use std::{fmt, iter};

use crate::{AdjacencyGraph, error::FormatError};

const NULL_ENTRY: &str = "null";

pub(crate) fn write_document<W: fmt::Write + ?Sized>(
    graph: &AdjacencyGraph,
    out: &mut W,
) -> fmt::Result {
    let vertex_count = graph.vertex_count();
    write!(out, "{vertex_count}")?;

    let mut pointer = vertex_count + 2;
    for adjacency in graph.adjacency_lists() {
        write!(out, "\n{pointer}")?;
        pointer += adjacency.len().max(1);
    }

    for adjacency in graph.adjacency_lists() {
        if adjacency.is_empty() {
            write!(out, "\n{NULL_ENTRY}")?;
            continue;
        }
        for index in adjacency {
            write!(out, "\n{}", index + 1)?;
        }
    }
    Ok(())
}

/// Parses an adjacency document back into an [`AdjacencyGraph`].
///
/// Every pointer is checked against the line at which its vertex's block
/// actually starts, so a successful parse guarantees the document was
/// internally consistent. A single trailing newline is tolerated.
///
/// # Errors
/// Returns [`FormatError`] describing the first inconsistency found.
///
/// # Examples
/// ```
/// use graphgen_core::{complete_graph, parse_document};
///
/// let graph = complete_graph(3)?;
/// let parsed = parse_document("3\n5\n7\n9\n2\n3\n1\n3\n1\n2")?;
/// assert_eq!(parsed, graph);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_document(document: &str) -> Result<AdjacencyGraph, FormatError> {
    let body = document.strip_suffix('\n').unwrap_or(document);
    if body.is_empty() {
        return Err(FormatError::Empty);
    }
    let lines: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let reader = Lines { lines: &lines };

    let vertex_count = reader.number(1)?;
    if vertex_count == 0 {
        return match lines.len() {
            1 => Ok(AdjacencyGraph::new()),
            _ => Err(FormatError::TrailingLines { line: 2 }),
        };
    }
    if vertex_count >= lines.len() {
        return Err(FormatError::MissingLine {
            line: lines.len() + 1,
        });
    }

    let pointers = (2..=vertex_count + 1)
        .map(|line| reader.number(line))
        .collect::<Result<Vec<_>, _>>()?;
    let ends = pointers
        .iter()
        .skip(1)
        .copied()
        .chain(iter::once(lines.len() + 1));

    let mut graph = AdjacencyGraph::with_vertices(vertex_count);
    let mut expected = vertex_count + 2;
    for (vertex, (&start, end)) in (1..).zip(pointers.iter().zip(ends)) {
        if start != expected {
            return Err(FormatError::PointerMismatch {
                vertex,
                expected,
                found: start,
            });
        }
        let block = Block {
            vertex,
            start,
            end,
            is_last: vertex == vertex_count,
        };
        reader.read_block(&block, &mut graph)?;
        expected = end;
    }
    Ok(graph)
}

struct Block {
    vertex: usize,
    start: usize,
    end: usize,
    is_last: bool,
}

struct Lines<'a> {
    lines: &'a [&'a str],
}

impl Lines<'_> {
    fn raw(&self, line: usize) -> Result<&str, FormatError> {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(|raw| raw.trim())
            .ok_or(FormatError::MissingLine { line })
    }

    fn number(&self, line: usize) -> Result<usize, FormatError> {
        let raw = self.raw(line)?;
        raw.parse().map_err(|_| FormatError::InvalidNumber {
            line,
            token: raw.to_owned(),
        })
    }

    fn read_block(&self, block: &Block, graph: &mut AdjacencyGraph) -> Result<(), FormatError> {
        if block.end <= block.start {
            return Err(if block.is_last {
                FormatError::MissingLine { line: block.start }
            } else {
                FormatError::PointerMismatch {
                    vertex: block.vertex + 1,
                    expected: block.start + 1,
                    found: block.end,
                }
            });
        }

        if self.raw(block.start)? == NULL_ENTRY {
            if block.end == block.start + 1 {
                return Ok(());
            }
            let line = block.start + 1;
            return Err(if block.is_last {
                FormatError::TrailingLines { line }
            } else {
                FormatError::PointerMismatch {
                    vertex: block.vertex + 1,
                    expected: line,
                    found: block.end,
                }
            });
        }

        let vertex_count = graph.vertex_count();
        for line in block.start..block.end {
            let neighbour = self.number(line)?;
            graph
                .add_edge(block.vertex, neighbour)
                .map_err(|_| FormatError::VertexOutOfRange {
                    line,
                    vertex: neighbour,
                    vertex_count,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty_graph(AdjacencyGraph::new(), "0")]
    #[case::isolated_vertices(AdjacencyGraph::with_vertices(3), "3\n5\n6\n7\nnull\nnull\nnull")]
    fn writes_documents_without_trailing_newline(
        #[case] graph: AdjacencyGraph,
        #[case] expected: &str,
    ) {
        assert_eq!(graph.serialize(), expected);
    }

    #[test]
    fn pointers_skip_null_placeholders() {
        let mut graph = AdjacencyGraph::with_vertices(3);
        graph.add_edge(1, 3).expect("endpoints exist");
        graph.add_edge(3, 1).expect("endpoints exist");
        assert_eq!(graph.serialize(), "3\n5\n6\n7\n3\nnull\n1");
    }

    #[rstest]
    #[case::blank("", FormatError::Empty)]
    #[case::bad_count("three", FormatError::InvalidNumber { line: 1, token: "three".into() })]
    #[case::missing_pointers("2\n4", FormatError::MissingLine { line: 3 })]
    #[case::first_pointer_off(
        "2\n5\n6\nnull\nnull",
        FormatError::PointerMismatch { vertex: 1, expected: 4, found: 5 },
    )]
    #[case::stalled_pointer(
        "2\n4\n4\nnull\nnull",
        FormatError::PointerMismatch { vertex: 2, expected: 5, found: 4 },
    )]
    #[case::last_block_missing("2\n4\n5\nnull", FormatError::MissingLine { line: 5 })]
    #[case::neighbour_out_of_range(
        "2\n4\n5\n3\nnull",
        FormatError::VertexOutOfRange { line: 4, vertex: 3, vertex_count: 2 },
    )]
    #[case::trailing_after_null("1\n3\nnull\n1", FormatError::TrailingLines { line: 4 })]
    #[case::trailing_after_empty_graph("0\nnull", FormatError::TrailingLines { line: 2 })]
    #[case::null_inside_block(
        "2\n4\n6\n2\nnull\n1",
        FormatError::InvalidNumber { line: 5, token: "null".into() },
    )]
    fn parse_document_rejects_inconsistent_documents(
        #[case] document: &str,
        #[case] expected: FormatError,
    ) {
        let err = parse_document(document).expect_err("document must be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case::unix("2\n4\n5\n2\n1\n")]
    #[case::windows("2\r\n4\r\n5\r\n2\r\n1")]
    fn parse_document_tolerates_line_ending_variants(#[case] document: &str) {
        let graph = parse_document(document).expect("document is consistent");
        assert_eq!(graph.serialize(), "2\n4\n5\n2\n1");
    }

    #[test]
    fn parse_document_keeps_duplicate_and_self_entries() {
        let graph = parse_document("1\n3\n1\n1").expect("degenerate cycle parses");
        let neighbours: Vec<usize> = graph.neighbours(1).expect("vertex 1").collect();
        assert_eq!(neighbours, vec![1, 1]);
    }
}
