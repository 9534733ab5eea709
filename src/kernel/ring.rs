use geo::{winding_order::WindingOrder, Coord, MultiPolygon, Polygon};
use itertools::Itertools;

use super::{point_on_segment, ExcludeEnd, DEFAULT_EPSILON};

/// Even-odd ray-cast test of `point` against a single ring.
///
/// A horizontal ray from `point` toggles the result at every edge it
/// crosses strictly between the edge's y-extents. The ring may be open
/// or closed; the closing edge is always considered.
pub fn point_in_ring(point: Coord<f64>, ring: &[Coord<f64>]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Checks if `point` is inside `polygon`.
///
/// Holes are handled by continuing the even-odd toggling across every
/// ring rather than by subtraction. With `ignore_boundary`, points on
/// any ring edge are reported outside.
pub fn point_in_polygon(point: Coord<f64>, polygon: &Polygon<f64>, ignore_boundary: bool) -> bool {
    let inside = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .fold(false, |inside, ring| inside ^ point_in_ring(point, &ring.0));

    if inside && ignore_boundary && on_boundary(point, polygon) {
        return false;
    }
    inside
}

/// Checks if `point` is inside any member of `polygons`.
pub fn point_in_multi_polygon(
    point: Coord<f64>,
    polygons: &MultiPolygon<f64>,
    ignore_boundary: bool,
) -> bool {
    polygons
        .0
        .iter()
        .any(|poly| point_in_polygon(point, poly, ignore_boundary))
}

fn on_boundary(point: Coord<f64>, polygon: &Polygon<f64>) -> bool {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.0.iter().tuple_windows())
        .any(|(&s, &e)| point_on_segment(s, e, point, DEFAULT_EPSILON, ExcludeEnd::None))
}

/// Shoelace sum `Σ (x[i+1] - x[i]) * (y[i+1] + y[i])` over consecutive
/// coordinates.
///
/// The sum is positive for clockwise rings in a y-up plane. It is twice
/// the negated signed area when the ring is closed.
pub fn ring_signed_sum(ring: &[Coord<f64>]) -> f64 {
    ring.iter()
        .tuple_windows()
        .map(|(a, b)| (b.x - a.x) * (b.y + a.y))
        .sum()
}

/// Checks if `ring` winds clockwise: its shoelace sum is positive.
///
/// This is the only winding convention in the crate. Polygon exteriors
/// are expected counter-clockwise and holes clockwise, following the
/// interchange-format orientation rule.
pub fn is_clockwise(ring: &[Coord<f64>]) -> bool {
    ring_signed_sum(ring) > 0.
}

/// Winding order of `ring`, or `None` if the shoelace sum is zero.
pub fn winding_order(ring: &[Coord<f64>]) -> Option<WindingOrder> {
    let sum = ring_signed_sum(ring);
    if sum > 0. {
        Some(WindingOrder::Clockwise)
    } else if sum < 0. {
        Some(WindingOrder::CounterClockwise)
    } else {
        None
    }
}
