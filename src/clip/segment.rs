use geo::Coord;

use crate::BoundingBox;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(c: Coord<f64>, bbox: &BoundingBox) -> u8 {
    let mut code = INSIDE;
    if c.x < bbox.min_x {
        code |= LEFT;
    } else if c.x > bbox.max_x {
        code |= RIGHT;
    }
    if c.y < bbox.min_y {
        code |= BOTTOM;
    } else if c.y > bbox.max_y {
        code |= TOP;
    }
    code
}

/// Move the end point with outcode `code` onto the first boundary it
/// violates, in order top, bottom, right, left.
fn clip_to_boundary(from: Coord<f64>, to: Coord<f64>, code: u8, bbox: &BoundingBox) -> Coord<f64> {
    let d = to - from;
    if code & TOP != 0 {
        Coord {
            x: from.x + d.x * (bbox.max_y - from.y) / d.y,
            y: bbox.max_y,
        }
    } else if code & BOTTOM != 0 {
        Coord {
            x: from.x + d.x * (bbox.min_y - from.y) / d.y,
            y: bbox.min_y,
        }
    } else if code & RIGHT != 0 {
        Coord {
            x: bbox.max_x,
            y: from.y + d.y * (bbox.max_x - from.x) / d.x,
        }
    } else {
        Coord {
            x: bbox.min_x,
            y: from.y + d.y * (bbox.min_x - from.x) / d.x,
        }
    }
}

/// Cohen–Sutherland clip of the segment `p1`-`p2` against `bbox`.
///
/// Segments entirely inside are returned unmodified; segments sharing an
/// outside half-plane, and every segment against an empty box, yield
/// `None`.
pub fn clip_segment(
    p1: Coord<f64>,
    p2: Coord<f64>,
    bbox: &BoundingBox,
) -> Option<(Coord<f64>, Coord<f64>)> {
    if bbox.is_empty() {
        return None;
    }

    let (mut a, mut b) = (p1, p2);
    let (mut code_a, mut code_b) = (outcode(a, bbox), outcode(b, bbox));
    loop {
        if code_a | code_b == INSIDE {
            return Some((a, b));
        }
        if code_a & code_b != 0 {
            return None;
        }
        if code_a != INSIDE {
            a = clip_to_boundary(a, b, code_a, bbox);
            code_a = outcode(a, bbox);
        } else {
            b = clip_to_boundary(b, a, code_b, bbox);
            code_b = outcode(b, bbox);
        }
    }
}
