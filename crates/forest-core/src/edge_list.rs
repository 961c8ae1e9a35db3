//! Plain-text edge lists.
//!
//! The format is line oriented:
//!
//! ```text
//! # comments run from '#' to the end of the line
//! 5
//! 0 1
//! 2 1
//! 3 4
//! ```
//!
//! The first content line holds the element count `n`. Every further content
//! line holds two element identifiers in `[0, n)` separated by whitespace.
//! Blank lines are ignored. Identifiers are read as signed integers so that a
//! negative id is reported as out of range rather than as a syntax error.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::disjoint_set::{DisjointSet, MAX_LEN, checked_element};
use crate::error::DisjointSetError;

/// Errors produced while parsing an edge list.
///
/// Line numbers are 1-based and count every line of the input, including
/// comments and blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeListError {
    /// The input contains no content lines at all.
    #[error("edge list is empty: expected an element count")]
    MissingCount,

    /// A line could not be split into the expected integers.
    #[error("line {line}: {detail}")]
    Malformed {
        /// Line of the offending input.
        line: usize,
        /// What was expected and what was found.
        detail: String,
    },

    /// The count or an identifier parsed but was rejected by validation.
    #[error("line {line}: {source}")]
    Element {
        /// Line of the offending input.
        line: usize,
        /// The validation failure.
        #[source]
        source: DisjointSetError,
    },
}

/// A parsed element count together with its edges, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of elements in the universe.
    pub len: usize,
    /// Edges, each naming two elements in `[0, len)`.
    pub edges: Vec<(usize, usize)>,
}

impl EdgeList {
    /// Applies every edge to a fresh [`DisjointSet`] of [`len`](Self::len)
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if an edge was pushed onto
    /// [`edges`](Self::edges) by hand with an element outside `[0, len)`.
    /// Parsed lists never fail here.
    pub fn build(&self) -> Result<DisjointSet, DisjointSetError> {
        DisjointSet::from_edges(self.len, self.edges.iter().copied())
    }
}

impl FromStr for EdgeList {
    type Err = EdgeListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_edge_list(s)
    }
}

impl fmt::Display for EdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.len)?;
        for (v, w) in &self.edges {
            writeln!(f, "{v} {w}")?;
        }
        Ok(())
    }
}

/// Parses an edge list, validating every identifier against the count.
///
/// # Errors
///
/// - [`EdgeListError::MissingCount`] if there is no content line.
/// - [`EdgeListError::Malformed`] for a line with the wrong number of tokens
///   or a token that is not an integer.
/// - [`EdgeListError::Element`] wrapping [`DisjointSetError::InvalidSize`]
///   for a negative count or one above [`MAX_LEN`], or [`DisjointSetError::OutOfRange`] for an
///   identifier outside `[0, n)`.
pub fn parse_edge_list(input: &str) -> Result<EdgeList, EdgeListError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, strip_comment(raw)))
        .filter(|(_, content)| !content.is_empty());

    let (count_line, count_text) = lines.next().ok_or(EdgeListError::MissingCount)?;
    let len = parse_count(count_line, count_text)?;

    let mut edges = Vec::new();
    for (line, content) in lines {
        let mut tokens = content.split_whitespace();
        let (Some(v), Some(w), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(EdgeListError::Malformed {
                line,
                detail: format!("expected two element ids, found {content:?}"),
            });
        };
        edges.push((
            parse_element(line, v, len)?,
            parse_element(line, w, len)?,
        ));
    }

    log::debug!("parsed edge list: {len} element(s), {} edge(s)", edges.len());
    Ok(EdgeList { len, edges })
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(before, _)| before).trim()
}

fn parse_count(line: usize, content: &str) -> Result<usize, EdgeListError> {
    let mut tokens = content.split_whitespace();
    let (Some(token), None) = (tokens.next(), tokens.next()) else {
        return Err(EdgeListError::Malformed {
            line,
            detail: format!("expected a single element count, found {content:?}"),
        });
    };
    let requested = parse_integer(line, token, "element count")?;
    usize::try_from(requested)
        .ok()
        .filter(|&n| n <= MAX_LEN)
        .ok_or(EdgeListError::Element {
            line,
            source: DisjointSetError::InvalidSize { requested },
        })
}

fn parse_element(line: usize, token: &str, len: usize) -> Result<usize, EdgeListError> {
    let raw = parse_integer(line, token, "element id")?;
    checked_element(raw, len).map_err(|source| EdgeListError::Element { line, source })
}

fn parse_integer(line: usize, token: &str, what: &str) -> Result<i64, EdgeListError> {
    token.parse::<i64>().map_err(|e| EdgeListError::Malformed {
        line,
        detail: format!("invalid {what} {token:?}: {e}"),
    })
}
