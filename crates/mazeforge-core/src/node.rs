//! [`GridNode`]: a maze cell with four directional link slots and a lazily
//! resolved coordinate.

use std::hash::{Hash, Hasher};

use crate::error::Error;
use crate::geom::{Direction, Point};

/// Handle to a node inside a [`MazeGraph`](crate::MazeGraph) arena.
///
/// Ids are indices into the member sequence, so `NodeId(i)` is also the
/// node's position in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a member-sequence index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The member-sequence index this id refers to.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

// ---------------------------------------------------------------------------
// LatticeNode
// ---------------------------------------------------------------------------

/// The narrow capability set a node shape must offer to the solver and the
/// codec: directional neighbor lookup and a fallible coordinate identifier.
///
/// [`GridNode`] is the only concrete shape today; non-grid variants can be
/// added behind this trait without touching solver or codec logic.
pub trait LatticeNode {
    /// The neighbor linked in `dir`, if any.
    fn neighbor(&self, dir: Direction) -> Option<NodeId>;

    /// The resolved coordinate, or [`Error::UnresolvedNodeAccess`].
    fn identifier(&self) -> Result<Point, Error>;
}

// ---------------------------------------------------------------------------
// GridNode
// ---------------------------------------------------------------------------

/// A grid cell holding up to four directional neighbor links and a lazily
/// computed coordinate.
///
/// A node starts either *resolved* (built with [`GridNode::at`]) or *pending*
/// (built with [`GridNode::new`]). A pending node resolves exactly once, by
/// deriving its coordinate from the first resolved neighbor in the fixed
/// left, right, up, down scan order; see
/// [`MazeGraph::resolve`](crate::MazeGraph::resolve). A pending node with no
/// neighbors simply stays pending.
#[derive(Debug, Clone, Default)]
pub struct GridNode {
    pos: Option<Point>,
    links: [Option<NodeId>; 4],
}

impl GridNode {
    /// Create a pending node with no coordinate and no neighbors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node already resolved at `pos`.
    pub fn at(pos: Point) -> Self {
        Self {
            pos: Some(pos),
            links: [None; 4],
        }
    }

    /// The resolved coordinate, if any.
    #[inline]
    pub fn pos(&self) -> Option<Point> {
        self.pos
    }

    /// Whether the coordinate has been resolved.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.pos.is_some()
    }

    /// Directions with no neighbor link set.
    pub fn free_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|d| self.links[d.index()].is_none())
    }

    pub(crate) fn set_neighbor(&mut self, dir: Direction, id: NodeId) {
        self.links[dir.index()] = Some(id);
    }

    pub(crate) fn set_pos(&mut self, pos: Point) {
        self.pos = Some(pos);
    }
}

impl LatticeNode for GridNode {
    #[inline]
    fn neighbor(&self, dir: Direction) -> Option<NodeId> {
        self.links[dir.index()]
    }

    fn identifier(&self) -> Result<Point, Error> {
        self.pos.ok_or(Error::UnresolvedNodeAccess)
    }
}

/// Two nodes are equal iff both have resolved positions and those positions
/// are equal. Pending nodes compare unequal to everything, themselves
/// included, which is why `Eq` is deliberately not implemented.
impl PartialEq for GridNode {
    fn eq(&self, other: &Self) -> bool {
        match (self.pos, other.pos) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Hashing is by position. Only resolved nodes may be used as hash keys;
/// hashing a pending node is outside the equality contract.
impl Hash for GridNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
