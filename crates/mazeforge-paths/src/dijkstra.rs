use mazeforge_core::{Direction, Error, LatticeNode, MazeGraph, NodeId};
use rand::{Rng, RngExt};

/// Sentinel distance for not-yet-relaxed members.
pub const UNREACHABLE: i32 = i32::MAX;

/// Compute the memoized default shortest path of `graph`.
///
/// Endpoints are two distinct members drawn uniformly at random. The result
/// is stored on the graph the first time this runs; later calls return the
/// stored path without consulting `rng`. Graphs with two or fewer members
/// pass through the member sequence unchanged, a documented quirk of minimal
/// graphs rather than an actual shortest path.
pub fn shortest_path<R: Rng>(graph: &mut MazeGraph, rng: &mut R) -> Result<Vec<NodeId>, Error> {
    if let Some(path) = graph.cached_path() {
        return Ok(path.to_vec());
    }
    let path = if graph.len() <= 2 {
        graph.ids().collect()
    } else {
        let len = graph.len();
        let source = rng.random_range(0..len);
        let mut target = rng.random_range(0..len);
        while target == source {
            target = rng.random_range(0..len);
        }
        solve(graph, source, target)?
    };
    graph.cache_path(path.clone());
    Ok(path)
}

/// Compute the shortest path between two explicit member indices.
///
/// Unlike [`shortest_path`] this never reads or writes the graph's memo.
/// Equal indices yield the single-element path. On graphs with two or fewer
/// members and distinct indices, the member sequence is passed through
/// unchanged (same quirk as the default query).
pub fn shortest_path_between(
    graph: &MazeGraph,
    source: usize,
    target: usize,
) -> Result<Vec<NodeId>, Error> {
    let len = graph.len();
    for index in [source, target] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }
    if source == target {
        return Ok(vec![NodeId::new(source)]);
    }
    if len <= 2 {
        return Ok(graph.ids().collect());
    }
    solve(graph, source, target)
}

/// Array-based Dijkstra over the unit-weight member graph.
///
/// The next node to settle is found by scanning all unvisited members for
/// the smallest distance, lowest member index on ties; the scan exits early
/// once the target settles. Reconstruction walks backward from the target,
/// stepping to the neighbor with the smallest recorded distance (direction
/// scan order breaking ties) exactly `dist[target]` times.
fn solve(graph: &MazeGraph, source: usize, target: usize) -> Result<Vec<NodeId>, Error> {
    graph.identifier(NodeId::new(source))?;
    graph.identifier(NodeId::new(target))?;

    let n = graph.len();
    let mut dist = vec![UNREACHABLE; n];
    let mut unvisited = vec![true; n];
    dist[source] = 0;

    loop {
        let mut current: Option<usize> = None;
        for i in 0..n {
            if unvisited[i]
                && dist[i] != UNREACHABLE
                && current.is_none_or(|c| dist[i] < dist[c])
            {
                current = Some(i);
            }
        }
        let Some(current) = current else { break };
        if current == target {
            break;
        }
        let node = graph.get(NodeId::new(current));
        for dir in Direction::ALL {
            if let Some(nb) = node.neighbor(dir) {
                let ni = nb.index();
                if unvisited[ni] && dist[current] + 1 < dist[ni] {
                    dist[ni] = dist[current] + 1;
                }
            }
        }
        unvisited[current] = false;
    }

    if dist[target] == UNREACHABLE {
        // Only possible on a hand-assembled disconnected graph; a detached
        // member never resolved against this component.
        return Err(Error::UnresolvedNodeAccess);
    }

    let mut rev = vec![NodeId::new(target)];
    let mut cur = target;
    for _ in 0..dist[target] {
        let node = graph.get(NodeId::new(cur));
        let mut best: Option<usize> = None;
        for dir in Direction::ALL {
            if let Some(nb) = node.neighbor(dir) {
                let ni = nb.index();
                if best.is_none_or(|b| dist[ni] < dist[b]) {
                    best = Some(ni);
                }
            }
        }
        let Some(next) = best else { break };
        rev.push(NodeId::new(next));
        cur = next;
    }
    rev.reverse();
    Ok(rev)
}
