//! Randomized growth generation of connected grid mazes.
//!
//! Growth keeps a frontier: prefer extending the most recently added member;
//! once that member has no free side, fall back to a uniformly random
//! non-exhausted member. Before choosing a growth direction, the frontier is
//! linked to any existing member sitting on one of its candidate coordinates,
//! so touching growth paths reconnect instead of duplicating a coordinate.
//! Cycles can therefore form: the result is a maze *embedding*, not a
//! spanning tree.

use mazeforge_core::{Direction, GridNode, LatticeNode, MazeGraph, NodeId, Point};
use rand::{Rng, RngExt};

/// Maze generator driven by a caller-supplied rng.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the given rng.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Grow a connected maze of `n` members, one of them at the origin.
    ///
    /// `n` is clamped to at least 1. Only structural properties are
    /// guaranteed: exactly `n` members, no duplicate coordinates, every
    /// member reachable from the origin, at most four neighbors each.
    pub fn generate(&mut self, n: usize) -> MazeGraph {
        let n = n.max(1);
        let mut graph = MazeGraph::new();
        let origin = graph
            .insert(GridNode::at(Point::ZERO))
            .expect("fresh graph has no occupied coordinates");

        // Per-member bookkeeping, indexed like the member sequence.
        let mut positions = vec![Point::ZERO];
        let mut exhausted = vec![false];
        let mut newest = origin;

        while graph.len() < n {
            let frontier = if !exhausted[newest.index()] {
                newest
            } else {
                let open: Vec<NodeId> =
                    graph.ids().filter(|id| !exhausted[id.index()]).collect();
                debug_assert!(!open.is_empty(), "a growing maze always has an open side");
                if open.is_empty() {
                    break;
                }
                open[self.rng.random_range(0..open.len())]
            };
            let fpos = positions[frontier.index()];

            // Reconnect with members the growth front already touches.
            for dir in Direction::ALL {
                if graph.get(frontier).neighbor(dir).is_none() {
                    if let Some(existing) = graph.node_at(fpos + dir.offset()) {
                        graph.link(frontier, dir, existing);
                    }
                }
            }

            let free: Vec<Direction> = graph.get(frontier).free_directions().collect();
            if free.is_empty() {
                exhausted[frontier.index()] = true;
                continue;
            }

            let dir = free[self.rng.random_range(0..free.len())];
            let node = graph.insert_pending();
            graph.link(frontier, dir, node);
            graph.resolve(node);
            positions.push(fpos + dir.offset());
            exhausted.push(false);
            newest = node;
        }

        log::debug!("generated maze with {} members", graph.len());
        graph
    }
}

/// Grow a connected maze of `n` members with a thread-local rng.
pub fn generate(n: usize) -> MazeGraph {
    MazeGen::new(rand::rng()).generate(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn grow(seed: u64, n: usize) -> MazeGraph {
        MazeGen::new(StdRng::seed_from_u64(seed)).generate(n)
    }

    #[test]
    fn single_node_maze() {
        let g = grow(0, 1);
        assert_eq!(g.len(), 1);
        let id = g.node_at(Point::ZERO).unwrap();
        for dir in Direction::ALL {
            assert_eq!(g.get(id).neighbor(dir), None);
        }
    }

    #[test]
    fn zero_clamps_to_one() {
        assert_eq!(grow(0, 0).len(), 1);
    }

    #[test]
    fn exact_member_count_with_unique_coordinates() {
        for (seed, n) in [(1, 2), (2, 7), (3, 25), (4, 120)] {
            let g = grow(seed, n);
            assert_eq!(g.len(), n);
            assert!(g.contains(Point::ZERO));
            let coords: HashSet<Point> = g
                .ids()
                .map(|id| g.identifier(id).unwrap())
                .collect();
            assert_eq!(coords.len(), n, "duplicate coordinate with seed {seed}");
        }
    }

    #[test]
    fn links_are_symmetric_and_offset_consistent() {
        let g = grow(11, 60);
        for id in g.ids() {
            let pos = g.identifier(id).unwrap();
            for dir in Direction::ALL {
                let Some(nb) = g.get(id).neighbor(dir) else {
                    continue;
                };
                assert_eq!(g.get(nb).neighbor(dir.opposite()), Some(id));
                assert_eq!(g.identifier(nb).unwrap(), pos + dir.offset());
            }
        }
    }

    #[test]
    fn every_member_is_reachable_from_origin() {
        let g = grow(5, 40);
        let origin = g.node_at(Point::ZERO).unwrap();
        let mut seen = HashSet::from([origin]);
        let mut stack = vec![origin];
        while let Some(id) = stack.pop() {
            for dir in Direction::ALL {
                if let Some(nb) = g.get(id).neighbor(dir) {
                    if seen.insert(nb) {
                        stack.push(nb);
                    }
                }
            }
        }
        assert_eq!(seen.len(), g.len());
    }

    #[test]
    fn thread_local_convenience() {
        let g = generate(10);
        assert_eq!(g.len(), 10);
        assert!(g.contains(Point::ZERO));
    }
}
