use geo::{Coord, LineString, MultiPoint, Polygon};
use itertools::Itertools;

use crate::kernel::{point_in_polygon, point_on_line, segment_intersection_point};

/// Two lines cross when some intersection of their segments is an end
/// point of neither line.
pub(crate) fn lines_cross(l: &LineString<f64>, m: &LineString<f64>, eps: f64) -> bool {
    l.lines()
        .cartesian_product(m.lines().collect_vec())
        .filter_map(|(s, t)| segment_intersection_point(s.start, s.end, t.start, t.end))
        .any(|pt| !is_end_point(pt, l, eps) && !is_end_point(pt, m, eps))
}

/// The line crosses the polygon exterior and leaves the polygon at one
/// of its ends at least.
pub(crate) fn line_crosses_polygon(line: &LineString<f64>, poly: &Polygon<f64>, eps: f64) -> bool {
    let (start, end) = match (line.0.first(), line.0.last()) {
        (Some(start), Some(end)) => (*start, *end),
        _ => return false,
    };
    lines_cross(line, poly.exterior(), eps)
        && (!point_in_polygon(start, poly, false) || !point_in_polygon(end, poly, false))
}

/// Some member passes `inside` and some other does not.
pub(crate) fn split_by<F>(points: &MultiPoint<f64>, inside: F) -> bool
where
    F: Fn(Coord<f64>) -> bool,
{
    let (mut found_in, mut found_out) = (false, false);
    for p in &points.0 {
        if inside(p.0) {
            found_in = true;
        } else {
            found_out = true;
        }
        if found_in && found_out {
            return true;
        }
    }
    false
}

pub(crate) fn multi_point_crosses_line(
    points: &MultiPoint<f64>,
    line: &LineString<f64>,
    eps: f64,
) -> bool {
    split_by(points, |c| point_on_line(c, line, eps, false))
}

pub(crate) fn multi_point_crosses_polygon(points: &MultiPoint<f64>, poly: &Polygon<f64>) -> bool {
    split_by(points, |c| point_in_polygon(c, poly, false))
}

fn is_end_point(pt: Coord<f64>, line: &LineString<f64>, eps: f64) -> bool {
    let near = |c: &Coord<f64>| (c.x - pt.x).abs() <= eps && (c.y - pt.y).abs() <= eps;
    line.0.first().map_or(false, near) || line.0.last().map_or(false, near)
}
