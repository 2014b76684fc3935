//! Shortest-path queries over maze graphs.
//!
//! The solver is a deliberately simple array-based Dijkstra: every edge has
//! unit weight and the next node to settle is found by a linear scan rather
//! than a priority queue, giving O(n²) per query. Maze graphs are
//! generation-sized, so the constant-free simplicity wins over asymptotics.
//!
//! Two entry points:
//! - [`shortest_path`] draws two distinct members at random and memoizes the
//!   result on the graph (computed once per graph instance);
//! - [`shortest_path_between`] takes explicit member indices and always
//!   recomputes, leaving the memo untouched.

mod dijkstra;

pub use dijkstra::{UNREACHABLE, shortest_path, shortest_path_between};
