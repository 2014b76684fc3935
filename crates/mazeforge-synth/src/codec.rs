//! Line-oriented text codec for maze graphs.
//!
//! One record per member, in member-sequence order, newline terminated:
//!
//! ```text
//! S(x,y)|L<coord-or-_>|R<coord-or-_>|U<coord-or-_>|D<coord-or-_>
//! ```
//!
//! `S` introduces the member's own coordinate; each of the four neighbor
//! slots carries either `_` (absent) or the neighbor's coordinate. The
//! parser also accepts a space after the comma, `(0, 0)`.
//!
//! Decoding replays the records in order: the first record's center is
//! trusted and materialized as-is; every later center must already have been
//! materialized as some earlier record's neighbor. Neighbor coordinates not
//! yet seen are created, linked, and resolved on the spot; ones already seen
//! are linked but never recreated, so records may reference each other
//! freely without duplicating coordinates.

use mazeforge_core::{Direction, Error, GridNode, LatticeNode, MazeGraph, NodeId, Point};

/// Serialize `graph` to its text form, one record per member with a trailing
/// newline after the final record.
///
/// Fails with [`Error::UnresolvedNodeAccess`] if any member or referenced
/// neighbor never resolved a coordinate.
pub fn encode(graph: &MazeGraph) -> Result<String, Error> {
    let mut out = String::new();
    for id in graph.ids() {
        out.push_str(&encode_node(graph, id)?);
        out.push('\n');
    }
    Ok(out)
}

/// Render a single member's record, without the line terminator.
pub fn encode_node(graph: &MazeGraph, id: NodeId) -> Result<String, Error> {
    let mut line = String::from("S");
    push_coord(&mut line, graph.identifier(id)?);
    for dir in Direction::ALL {
        line.push('|');
        line.push(dir.letter());
        match graph.get(id).neighbor(dir) {
            Some(nb) => push_coord(&mut line, graph.identifier(nb)?),
            None => line.push('_'),
        }
    }
    Ok(line)
}

fn push_coord(out: &mut String, p: Point) {
    out.push_str(&format!("({},{})", p.x, p.y));
}

/// Reconstruct a graph from its text form.
///
/// Empty input yields an empty graph. Any malformed record, unknown center,
/// or neighbor coordinate inconsistent with its direction offset is an
/// [`Error::Decode`].
pub fn decode(text: &str) -> Result<MazeGraph, Error> {
    let mut graph = MazeGraph::new();
    for (lineno, line) in text.lines().enumerate() {
        let rec = Record::parse(lineno, line)?;
        let center = match graph.node_at(rec.center) {
            Some(id) => id,
            None if graph.is_empty() => graph.insert(GridNode::at(rec.center))?,
            None => {
                return Err(Error::Decode {
                    line: lineno,
                    msg: format!("center {} was never referenced by an earlier record", rec.center),
                });
            }
        };
        for dir in Direction::ALL {
            let Some(npos) = rec.neighbors[dir.index()] else {
                continue;
            };
            if npos != rec.center + dir.offset() {
                return Err(Error::Decode {
                    line: lineno,
                    msg: format!("neighbor {npos} is not {} of {}", dir, rec.center),
                });
            }
            match graph.node_at(npos) {
                Some(nb) => graph.link(center, dir, nb),
                None => {
                    let nb = graph.insert_pending();
                    graph.link(center, dir, nb);
                    graph.resolve(nb);
                }
            }
        }
    }
    Ok(graph)
}

// ---------------------------------------------------------------------------
// Record parsing
// ---------------------------------------------------------------------------

struct Record {
    center: Point,
    neighbors: [Option<Point>; 4],
}

impl Record {
    fn parse(lineno: usize, line: &str) -> Result<Self, Error> {
        let mut fields = line.split('|');
        let head = fields.next().unwrap_or_default();
        let center = head.strip_prefix('S').ok_or_else(|| Error::Decode {
            line: lineno,
            msg: format!("record must start with S, got {head:?}"),
        })?;
        let center = parse_coord(lineno, center)?;

        let mut neighbors = [None; 4];
        for dir in Direction::ALL {
            let field = fields.next().ok_or_else(|| Error::Decode {
                line: lineno,
                msg: format!("missing {} slot", dir.letter()),
            })?;
            let value = field.strip_prefix(dir.letter()).ok_or_else(|| Error::Decode {
                line: lineno,
                msg: format!("expected {} slot, got {field:?}", dir.letter()),
            })?;
            if value != "_" {
                neighbors[dir.index()] = Some(parse_coord(lineno, value)?);
            }
        }
        if fields.next().is_some() {
            return Err(Error::Decode {
                line: lineno,
                msg: "trailing fields after the D slot".into(),
            });
        }
        Ok(Self { center, neighbors })
    }
}

fn parse_coord(lineno: usize, token: &str) -> Result<Point, Error> {
    let malformed = || Error::Decode {
        line: lineno,
        msg: format!("malformed coordinate token {token:?}"),
    };
    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let (x, y) = inner.split_once(',').ok_or_else(malformed)?;
    let x: i32 = x.trim().parse().map_err(|_| malformed())?;
    let y: i32 = y.trim().parse().map_err(|_| malformed())?;
    Ok(Point::new(x, y))
}
