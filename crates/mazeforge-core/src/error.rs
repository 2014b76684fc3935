//! The error type shared by graph construction, solving, and the text codec.

use std::fmt;

use crate::geom::Point;

/// Failures surfaced by maze construction, path queries, and the text codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A member was constructed at a coordinate the graph already occupies.
    InvalidConstruction { pos: Point },
    /// An explicit source/target index was outside the member sequence.
    IndexOutOfRange { index: usize, len: usize },
    /// A text record could not be parsed, or referenced an unknown center.
    Decode { line: usize, msg: String },
    /// An operation needed a coordinate from a node that never resolved one.
    UnresolvedNodeAccess,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstruction { pos } => {
                write!(f, "coordinate {pos} is already occupied")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "member index {index} out of range (graph has {len} members)")
            }
            Self::Decode { line, msg } => {
                write!(f, "decode error at record {line}: {msg}")
            }
            Self::UnresolvedNodeAccess => {
                write!(f, "node has no resolved coordinate")
            }
        }
    }
}

impl std::error::Error for Error {}
