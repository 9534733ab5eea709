use geo::{Coord, LineString};
use log::trace;

use crate::BoundingBox;

/// One of the four half-planes bounding the clip box.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Edge {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl Edge {
    fn of(bbox: &BoundingBox) -> [Edge; 4] {
        [
            Edge::Left(bbox.min_x),
            Edge::Right(bbox.max_x),
            Edge::Bottom(bbox.min_y),
            Edge::Top(bbox.max_y),
        ]
    }

    fn inside(self, c: Coord<f64>) -> bool {
        match self {
            Edge::Left(x) => c.x >= x,
            Edge::Right(x) => c.x <= x,
            Edge::Bottom(y) => c.y >= y,
            Edge::Top(y) => c.y <= y,
        }
    }

    /// Point where `a`-`b` meets the boundary line. Only called when the
    /// two points are on opposite sides, so the divisor is non-zero.
    fn intersect(self, a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
        let d = b - a;
        match self {
            Edge::Left(x) | Edge::Right(x) => Coord {
                x,
                y: a.y + d.y * (x - a.x) / d.x,
            },
            Edge::Bottom(y) | Edge::Top(y) => Coord {
                x: a.x + d.x * (y - a.y) / d.y,
                y,
            },
        }
    }

    /// One Sutherland–Hodgman pass over an open polygon.
    fn clip(self, input: &[Coord<f64>]) -> Vec<Coord<f64>> {
        let mut output = Vec::with_capacity(input.len() + 2);
        let mut push = |c: Coord<f64>| {
            if output.last() != Some(&c) {
                output.push(c);
            }
        };

        let mut prev = match input.last() {
            Some(prev) => *prev,
            None => return vec![],
        };
        for &cur in input {
            match (self.inside(prev), self.inside(cur)) {
                (true, true) => push(cur),
                (false, true) => {
                    push(self.intersect(prev, cur));
                    push(cur);
                }
                (true, false) => push(self.intersect(prev, cur)),
                (false, false) => {}
            }
            prev = cur;
        }
        output
    }
}

/// Sutherland–Hodgman clip of `ring` against `bbox`.
///
/// The ring may be open or closed; the result is closed. Rings left
/// with fewer than three distinct positions are degenerate and yield
/// `None`.
pub fn clip_ring(ring: &LineString<f64>, bbox: &BoundingBox) -> Option<LineString<f64>> {
    if bbox.is_empty() {
        return None;
    }

    let mut coords = ring.0.clone();
    if ring.is_closed() {
        coords.pop();
    }
    for edge in Edge::of(bbox) {
        coords = edge.clip(&coords);
        trace!("{:?} pass left {} positions", edge, coords.len());
    }

    while coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    if coords.len() < 3 {
        return None;
    }
    let mut clipped = LineString(coords);
    clipped.close();
    Some(clipped)
}
