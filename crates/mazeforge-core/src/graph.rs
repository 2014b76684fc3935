//! [`MazeGraph`]: an ordered arena of grid nodes with coordinate membership,
//! bidirectional linking, and lazy coordinate resolution.

use std::collections::HashMap;

use crate::error::Error;
use crate::geom::{Direction, Point};
use crate::node::{GridNode, LatticeNode, NodeId};

/// An ordered collection of [`GridNode`]s forming a connected induced
/// subgraph of the integer grid.
///
/// Insertion order is preserved and doubles as the member-index space used by
/// the path solver. No two members share a coordinate; growth and decoding
/// check a candidate coordinate against the membership index before creating
/// a node there.
///
/// The graph also carries the solver's memoized default path: written at most
/// once per graph by the no-endpoints query, never invalidated by mutation.
/// Because that write takes `&mut self`, a graph must not be shared across
/// threads for concurrent path queries.
#[derive(Debug, Clone, Default)]
pub struct MazeGraph {
    nodes: Vec<GridNode>,
    by_pos: HashMap<Point, NodeId>,
    path_cache: Option<Vec<NodeId>>,
}

impl MazeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The member behind `id`.
    ///
    /// Ids handed out by this graph are always valid; indexing with an id
    /// from another graph may panic or alias an unrelated member.
    #[inline]
    pub fn get(&self, id: NodeId) -> &GridNode {
        &self.nodes[id.index()]
    }

    /// Members in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    /// Ids of all members in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Look up the member resolved at coordinate `p`.
    #[inline]
    pub fn node_at(&self, p: Point) -> Option<NodeId> {
        self.by_pos.get(&p).copied()
    }

    /// Whether some member is resolved at coordinate `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.by_pos.contains_key(&p)
    }

    /// Append a node to the member sequence.
    ///
    /// A node carrying a coordinate that is already occupied is rejected with
    /// [`Error::InvalidConstruction`]; pending nodes always succeed.
    pub fn insert(&mut self, node: GridNode) -> Result<NodeId, Error> {
        if let Some(pos) = node.pos() {
            if self.by_pos.contains_key(&pos) {
                return Err(Error::InvalidConstruction { pos });
            }
            let id = NodeId::new(self.nodes.len());
            self.by_pos.insert(pos, id);
            self.nodes.push(node);
            Ok(id)
        } else {
            let id = NodeId::new(self.nodes.len());
            self.nodes.push(node);
            Ok(id)
        }
    }

    /// Append a pending node. Cannot collide, so cannot fail.
    pub fn insert_pending(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(GridNode::new());
        id
    }

    /// Link `a` to `b` in direction `dir`, healing the reciprocal side.
    ///
    /// Sets `a`'s `dir` slot to `b` and, unless `b`'s reciprocal slot already
    /// points back at `a`, sets that too. Safe to call twice with the same
    /// arguments.
    pub fn link(&mut self, a: NodeId, dir: Direction, b: NodeId) {
        self.nodes[a.index()].set_neighbor(dir, b);
        let opp = dir.opposite();
        if self.nodes[b.index()].neighbor(opp) != Some(a) {
            self.nodes[b.index()].set_neighbor(opp, a);
        }
    }

    /// Resolve `id`'s coordinate from its first resolved neighbor.
    ///
    /// Scans neighbors in the fixed left, right, up, down order; the first
    /// resolved one fixes this node's coordinate as `neighbor - offset(dir)`.
    /// A no-op on already-resolved nodes. Returns whether the node is
    /// resolved after the call; a node with no resolved neighbor stays
    /// pending, which is a terminal state rather than an error.
    pub fn resolve(&mut self, id: NodeId) -> bool {
        if self.nodes[id.index()].is_resolved() {
            return true;
        }
        for dir in Direction::ALL {
            let Some(nb) = self.nodes[id.index()].neighbor(dir) else {
                continue;
            };
            let Some(npos) = self.nodes[nb.index()].pos() else {
                continue;
            };
            let pos = npos - dir.offset();
            debug_assert!(
                !self.by_pos.contains_key(&pos),
                "resolution collided at {pos}"
            );
            self.nodes[id.index()].set_pos(pos);
            self.by_pos.insert(pos, id);
            return true;
        }
        false
    }

    /// The resolved coordinate of `id`, or [`Error::UnresolvedNodeAccess`].
    pub fn identifier(&self, id: NodeId) -> Result<Point, Error> {
        self.get(id).identifier()
    }

    /// Map a path of ids to their coordinates.
    pub fn positions(&self, ids: &[NodeId]) -> Result<Vec<Point>, Error> {
        ids.iter().map(|&id| self.identifier(id)).collect()
    }

    /// The memoized default shortest path, if one was stored.
    #[inline]
    pub fn cached_path(&self) -> Option<&[NodeId]> {
        self.path_cache.as_deref()
    }

    /// Store the default shortest path. Overwrites any previous value; only
    /// the solver's no-endpoints query writes here.
    pub fn cache_path(&mut self, path: Vec<NodeId>) {
        self.path_cache = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_heals_both_sides() {
        let mut g = MazeGraph::new();
        let a = g.insert(GridNode::at(Point::ZERO)).unwrap();
        let b = g.insert_pending();
        g.link(a, Direction::Right, b);
        assert_eq!(g.get(a).neighbor(Direction::Right), Some(b));
        assert_eq!(g.get(b).neighbor(Direction::Left), Some(a));
        // Idempotent.
        g.link(a, Direction::Right, b);
        assert_eq!(g.get(a).neighbor(Direction::Right), Some(b));
        assert_eq!(g.get(b).neighbor(Direction::Left), Some(a));
    }

    #[test]
    fn resolve_derives_from_linked_neighbor() {
        let mut g = MazeGraph::new();
        let a = g.insert(GridNode::at(Point::new(3, 5))).unwrap();
        let b = g.insert_pending();
        g.link(a, Direction::Up, b);
        assert!(g.resolve(b));
        // b sits above a.
        assert_eq!(g.identifier(b), Ok(Point::new(3, 6)));
        assert_eq!(g.node_at(Point::new(3, 6)), Some(b));
    }

    #[test]
    fn resolve_scans_left_first() {
        // A pending node linked on two sides derives from its left neighbor,
        // the first resolved one in scan order.
        let mut g = MazeGraph::new();
        let left = g.insert(GridNode::at(Point::new(-1, 0))).unwrap();
        let right = g.insert(GridNode::at(Point::new(1, 0))).unwrap();
        let mid = g.insert_pending();
        g.link(mid, Direction::Left, left);
        g.link(mid, Direction::Right, right);
        assert!(g.resolve(mid));
        assert_eq!(g.identifier(mid), Ok(Point::ZERO));
    }

    #[test]
    fn resolve_without_neighbors_stays_pending() {
        let mut g = MazeGraph::new();
        let n = g.insert_pending();
        assert!(!g.resolve(n));
        assert_eq!(g.identifier(n), Err(Error::UnresolvedNodeAccess));
    }

    #[test]
    fn duplicate_coordinate_is_rejected() {
        let mut g = MazeGraph::new();
        g.insert(GridNode::at(Point::ZERO)).unwrap();
        let err = g.insert(GridNode::at(Point::ZERO)).unwrap_err();
        assert_eq!(err, Error::InvalidConstruction { pos: Point::ZERO });
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn path_cache_round_trip() {
        let mut g = MazeGraph::new();
        let a = g.insert(GridNode::at(Point::ZERO)).unwrap();
        assert!(g.cached_path().is_none());
        g.cache_path(vec![a]);
        assert_eq!(g.cached_path(), Some(&[a][..]));
    }
}
