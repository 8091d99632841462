//! Graph descriptor parsing.
//!
//! A descriptor is a whitespace-separated token sequence:
//! `COMPLETE <n>`, `CYCLE <n>`, or `RANDOM <n> <UNIFORM|TIERED> <k>`.
//! Keywords match ASCII case-insensitively.

use std::str::FromStr;

use tracing::warn;

use crate::{Distribution, GraphKind, error::DescriptorError};

/// Parses a descriptor into a [`GraphKind`].
///
/// Tokens following a complete descriptor are ignored and reported through a
/// `warn` event.
///
/// # Errors
/// Returns [`DescriptorError`] when a keyword is unknown, a token is missing,
/// a count is not a non-negative integer, or the vertex count is zero.
///
/// # Examples
/// ```
/// use graphgen_core::{Distribution, GraphKind, parse_descriptor};
///
/// let kind = parse_descriptor("RANDOM 100\nTIERED 40\n")?;
/// assert_eq!(
///     kind,
///     GraphKind::Random { vertices: 100, edges: 40, distribution: Distribution::Tiered },
/// );
/// # Ok::<(), graphgen_core::DescriptorError>(())
/// ```
pub fn parse_descriptor(input: &str) -> Result<GraphKind, DescriptorError> {
    let mut tokens = input.split_whitespace();
    let keyword = next_token(&mut tokens, "graph kind")?;
    let kind = match keyword.to_ascii_uppercase().as_str() {
        "COMPLETE" => GraphKind::Complete {
            vertices: vertex_count(&mut tokens)?,
        },
        "CYCLE" => GraphKind::Cycle {
            vertices: vertex_count(&mut tokens)?,
        },
        "RANDOM" => {
            let vertices = vertex_count(&mut tokens)?;
            let distribution = next_token(&mut tokens, "distribution")?.parse()?;
            let edges = integer(next_token(&mut tokens, "edge count")?, "edge count")?;
            GraphKind::Random {
                vertices,
                edges,
                distribution,
            }
        }
        _ => {
            return Err(DescriptorError::UnknownGraphKind {
                token: keyword.to_owned(),
            });
        }
    };

    let ignored = tokens.count();
    if ignored > 0 {
        warn!(ignored, descriptor = %kind, "ignoring tokens after graph descriptor");
    }
    Ok(kind)
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<&'a str, DescriptorError> {
    tokens.next().ok_or(DescriptorError::MissingToken { expected })
}

fn vertex_count<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, DescriptorError> {
    let vertices = integer(next_token(tokens, "vertex count")?, "vertex count")?;
    if vertices == 0 {
        return Err(DescriptorError::ZeroVertices);
    }
    Ok(vertices)
}

fn integer(token: &str, field: &'static str) -> Result<usize, DescriptorError> {
    token.parse().map_err(|_| DescriptorError::InvalidInteger {
        field,
        token: token.to_owned(),
    })
}

impl FromStr for GraphKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_descriptor(s)
    }
}

impl FromStr for Distribution {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UNIFORM" => Ok(Self::Uniform),
            "TIERED" => Ok(Self::Tiered),
            _ => Err(DescriptorError::UnknownDistribution {
                token: s.to_owned(),
            }),
        }
    }
}
