use geo::{LineString, Polygon};
use itertools::Itertools;

use super::{parts, Part};
use crate::{
    kernel::{point_in_polygon, point_on_line, segments_intersect},
    Geometry,
};

/// Two geometries are disjoint iff every pair of their members is.
pub(crate) fn disjoint(a: &Geometry, b: &Geometry, eps: f64) -> bool {
    let others = parts(b);
    parts(a)
        .into_iter()
        .cartesian_product(others)
        .all(|(p, q)| parts_disjoint(p, q, eps))
}

/// Negation of [`disjoint`]. The tolerance bounds a cross product, not a
/// distance, so there is no bounding box shortcut.
pub(crate) fn intersects(a: &Geometry, b: &Geometry, eps: f64) -> bool {
    !disjoint(a, b, eps)
}

fn parts_disjoint(a: Part, b: Part, eps: f64) -> bool {
    use Part::*;
    match (a, b) {
        (Point(p), Point(q)) => p != q,
        (Point(p), Line(ls)) | (Line(ls), Point(p)) => !point_on_line(p, ls, eps, false),
        (Point(p), Area(poly)) | (Area(poly), Point(p)) => !point_in_polygon(p, poly, false),
        (Line(l), Line(m)) => !lines_intersect(l, m),
        (Line(ls), Area(poly)) | (Area(poly), Line(ls)) => !line_meets_polygon(ls, poly),
        (Area(p), Area(q)) => !polygons_meet(p, q),
    }
}

/// Checks all segment pairs of two lines with the orientation test.
pub(crate) fn lines_intersect(l: &LineString<f64>, m: &LineString<f64>) -> bool {
    l.lines()
        .cartesian_product(m.lines().collect_vec())
        .any(|(s, t)| segments_intersect(s.start, s.end, t.start, t.end))
}

fn line_meets_polygon(ls: &LineString<f64>, poly: &Polygon<f64>) -> bool {
    ls.0.iter().any(|c| point_in_polygon(*c, poly, false))
        || std::iter::once(poly.exterior())
            .chain(poly.interiors())
            .any(|ring| lines_intersect(ls, ring))
}

fn polygons_meet(p: &Polygon<f64>, q: &Polygon<f64>) -> bool {
    p.exterior().0.iter().any(|c| point_in_polygon(*c, q, false))
        || q.exterior().0.iter().any(|c| point_in_polygon(*c, p, false))
        || lines_intersect(p.exterior(), q.exterior())
}
