//! Core types for synthetic grid-maze graphs.
//!
//! A maze is a connected induced subgraph of the integer grid: each
//! [`GridNode`] sits at an `(x, y)` coordinate and links to at most four
//! neighbors, one per [`Direction`]. Nodes live in a [`MazeGraph`] arena and
//! are addressed by [`NodeId`] handles.
//!
//! Coordinates are resolved lazily: a node created without a position derives
//! it from the first resolved neighbor found in the fixed left, right, up,
//! down scan order. Construction (growth or decoding) always links a new node
//! to an already-resolved member before resolving it, so a well-formed graph
//! contains no pending nodes.

pub mod error;
pub mod geom;
pub mod graph;
pub mod node;

pub use error::Error;
pub use geom::{Direction, Point};
pub use graph::MazeGraph;
pub use node::{GridNode, LatticeNode, NodeId};
