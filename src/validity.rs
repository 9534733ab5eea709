//! Structural validity and convexity checks.
use geo::{Coord, LineString, Polygon};
use itertools::Itertools;

use crate::{
    geometry::is_finite,
    kernel::{point_in_ring, segments_intersect},
    Geometry,
};

/// Checks that `geom` is well formed.
///
/// Points need finite coordinates; line strings need two or more finite
/// positions of which at least two differ. Polygon rings must be closed,
/// have at least four positions, and not cross themselves; holes may
/// neither touch the exterior nor each other. Members of a multi
/// polygon must be valid and their exteriors may not intersect.
pub fn is_valid(geom: &Geometry) -> bool {
    match geom {
        Geometry::Point(p) => is_finite(p.0),
        Geometry::MultiPoint(mp) => mp.0.iter().all(|p| is_finite(p.0)),
        Geometry::LineString(ls) => is_valid_line(ls),
        Geometry::MultiLineString(mls) => mls.0.iter().all(is_valid_line),
        Geometry::Polygon(poly) => is_valid_polygon(poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().all(is_valid_polygon)
                && mp
                    .0
                    .iter()
                    .tuple_combinations()
                    .all(|(a, b)| !rings_intersect(a.exterior(), b.exterior()))
        }
    }
}

fn is_valid_line(ls: &LineString<f64>) -> bool {
    ls.0.len() >= 2
        && ls.0.iter().all(|c| is_finite(*c))
        && ls.0.iter().any(|c| *c != ls.0[0])
}

fn is_valid_ring(ring: &LineString<f64>) -> bool {
    ring.0.len() >= 4
        && ring.is_closed()
        && ring.0.iter().all(|c| is_finite(*c))
        && !has_self_intersections(ring)
}

fn is_valid_polygon(poly: &Polygon<f64>) -> bool {
    let rings = || std::iter::once(poly.exterior()).chain(poly.interiors());
    rings().all(is_valid_ring)
        && rings()
            .tuple_combinations()
            .all(|(a, b)| !share_vertex(a, b) && !edges_cross(a, b))
}

/// Pairwise edge test within one ring, skipping adjacent edges and the
/// first/closing edge pair.
fn has_self_intersections(ring: &LineString<f64>) -> bool {
    let edges = ring.0.len() - 1;
    (0..edges)
        .tuple_combinations()
        .filter(|&(i, j)| j > i + 1 && !(i == 0 && j == edges - 1))
        .any(|(i, j)| segments_intersect(ring[i], ring[i + 1], ring[j], ring[j + 1]))
}

fn share_vertex(a: &LineString<f64>, b: &LineString<f64>) -> bool {
    a.0.iter().any(|c| b.0.contains(c))
}

fn edges_cross(a: &LineString<f64>, b: &LineString<f64>) -> bool {
    a.lines()
        .cartesian_product(b.lines().collect_vec())
        .any(|(l, m)| segments_intersect(l.start, l.end, m.start, m.end))
}

fn rings_intersect(a: &LineString<f64>, b: &LineString<f64>) -> bool {
    let inside = |ring: &LineString<f64>, c: &Coord<f64>| point_in_ring(*c, &ring.0);
    edges_cross(a, b) || a.0.iter().any(|c| inside(b, c)) || b.0.iter().any(|c| inside(a, c))
}

/// Checks if the exterior of `poly` has a reflex vertex.
///
/// The sign of the cross product of consecutive edge vectors is tracked
/// around the ring; a sign change means concave. Collinear vertices
/// count as a negative turn. Closed rings of five or fewer positions are
/// reported convex without inspection.
pub fn is_concave(poly: &Polygon<f64>) -> bool {
    let ring = &poly.exterior().0;
    if ring.len() <= 5 {
        return false;
    }

    let n = ring.len() - 1;
    let mut turns = (0..n).map(|i| {
        let (prev, cur, next) = (ring[i], ring[(i + 1) % n], ring[(i + 2) % n]);
        let (d1, d2) = (next - cur, prev - cur);
        d1.x * d2.y - d1.y * d2.x > 0.
    });
    match turns.next() {
        Some(first) => turns.any(|sign| sign != first),
        None => false,
    }
}
