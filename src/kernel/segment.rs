use geo::{kernels::Orientation, Coord, LineString};
use itertools::Itertools;

use super::ORIENTATION_EPSILON;

/// Which end point of a segment to exclude from an on-segment query.
///
/// Exclusion is by exact coordinate equality: a point within epsilon of
/// an excluded end point, but not equal to it, still counts as on the
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcludeEnd {
    #[default]
    None,
    Start,
    End,
    Both,
}

impl ExcludeEnd {
    #[inline]
    fn excludes(self, start: Coord<f64>, end: Coord<f64>, point: Coord<f64>) -> bool {
        match self {
            ExcludeEnd::None => false,
            ExcludeEnd::Start => point == start,
            ExcludeEnd::End => point == end,
            ExcludeEnd::Both => point == start || point == end,
        }
    }
}

/// Checks if `point` lies on the segment `start`-`end`.
///
/// The point must be collinear within `epsilon` (absolute cross
/// product), and its projection, measured as the dot product with the
/// segment direction, must fall in `[-epsilon, |end - start|² + epsilon]`.
pub fn point_on_segment(
    start: Coord<f64>,
    end: Coord<f64>,
    point: Coord<f64>,
    epsilon: f64,
    exclude: ExcludeEnd,
) -> bool {
    if exclude.excludes(start, end, point) {
        return false;
    }

    let d = end - start;
    let v = point - start;

    let cross = v.y * d.x - v.x * d.y;
    if cross.abs() > epsilon {
        return false;
    }

    let dot = v.x * d.x + v.y * d.y;
    let squared_length = d.x * d.x + d.y * d.y;
    dot >= -epsilon && dot <= squared_length + epsilon
}

/// Checks if `point` lies on any segment of `line`.
///
/// With `ignore_end_vertices` the first and last coordinates of the
/// line are excluded; interior vertices still count.
pub fn point_on_line(
    point: Coord<f64>,
    line: &LineString<f64>,
    epsilon: f64,
    ignore_end_vertices: bool,
) -> bool {
    let (first, last) = match (line.0.first(), line.0.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return false,
    };
    if ignore_end_vertices && (point == first || point == last) {
        return false;
    }
    if line.0.len() == 1 {
        return point == first;
    }
    line.0
        .iter()
        .tuple_windows()
        .any(|(&start, &end)| point_on_segment(start, end, point, epsilon, ExcludeEnd::None))
}

/// Orientation of the turn `a -> b -> c`.
///
/// Uses `(b.y - a.y)(c.x - b.x) - (b.x - a.x)(c.y - b.y)`: positive is a
/// clockwise turn, negative counter-clockwise, and magnitudes under
/// [`ORIENTATION_EPSILON`] are collinear.
#[inline]
pub fn orientation(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val.abs() < ORIENTATION_EPSILON {
        Orientation::Collinear
    } else if val > 0. {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Checks if segments `p1`-`p2` and `p3`-`p4` cross.
///
/// Only the general-position test is performed: two collinear
/// overlapping segments report `false`. Segments sharing a single end
/// point at a non-zero angle report `true`.
pub fn segments_intersect(p1: Coord<f64>, p2: Coord<f64>, p3: Coord<f64>, p4: Coord<f64>) -> bool {
    orientation(p1, p2, p3) != orientation(p1, p2, p4)
        && orientation(p3, p4, p1) != orientation(p3, p4, p2)
}

/// Intersection point of segments `p1`-`p2` and `p3`-`p4`, if any.
///
/// Parallel and coincident segments (zero denominator) have none.
pub fn segment_intersection_point(
    p1: Coord<f64>,
    p2: Coord<f64>,
    p3: Coord<f64>,
    p4: Coord<f64>,
) -> Option<Coord<f64>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let denominator = d2.y * d1.x - d2.x * d1.y;
    if denominator == 0. {
        return None;
    }

    let a = p1.y - p3.y;
    let b = p1.x - p3.x;
    let ua = (d2.x * a - d2.y * b) / denominator;
    let ub = (d1.x * a - d1.y * b) / denominator;

    if (0. ..=1.).contains(&ua) && (0. ..=1.).contains(&ub) {
        Some(Coord {
            x: p1.x + ua * d1.x,
            y: p1.y + ua * d1.y,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::coord;

    use super::*;
    use crate::kernel::{tests::ring, DEFAULT_EPSILON};

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn on_segment_interior_and_ends() {
        let (s, e) = (c(0., 0.), c(2., 2.));
        assert!(point_on_segment(s, e, c(1., 1.), DEFAULT_EPSILON, ExcludeEnd::None));
        assert!(point_on_segment(s, e, s, DEFAULT_EPSILON, ExcludeEnd::None));
        assert!(point_on_segment(s, e, e, DEFAULT_EPSILON, ExcludeEnd::None));
        assert!(!point_on_segment(s, e, c(1., 1.1), DEFAULT_EPSILON, ExcludeEnd::None));
        // Collinear but beyond the end point.
        assert!(!point_on_segment(s, e, c(3., 3.), DEFAULT_EPSILON, ExcludeEnd::None));
        assert!(!point_on_segment(s, e, c(-1., -1.), DEFAULT_EPSILON, ExcludeEnd::None));
    }

    #[test]
    fn on_segment_exclusions() {
        let (s, e) = (c(0., 0.), c(2., 0.));
        assert!(!point_on_segment(s, e, s, DEFAULT_EPSILON, ExcludeEnd::Start));
        assert!(point_on_segment(s, e, e, DEFAULT_EPSILON, ExcludeEnd::Start));
        assert!(!point_on_segment(s, e, e, DEFAULT_EPSILON, ExcludeEnd::End));
        assert!(!point_on_segment(s, e, e, DEFAULT_EPSILON, ExcludeEnd::Both));
        assert!(point_on_segment(s, e, c(1., 0.), DEFAULT_EPSILON, ExcludeEnd::Both));
    }

    #[test]
    fn on_segment_epsilon_band() {
        let (s, e) = (c(0., 0.), c(1., 0.));
        // Cross product 5e-11 is under the default epsilon.
        assert!(point_on_segment(s, e, c(0.5, 5e-11), DEFAULT_EPSILON, ExcludeEnd::None));
        assert!(!point_on_segment(s, e, c(0.5, 5e-10), DEFAULT_EPSILON, ExcludeEnd::None));
        assert!(point_on_segment(s, e, c(0.5, 5e-10), 1e-9, ExcludeEnd::None));
        // Dot product slightly negative but within epsilon.
        assert!(point_on_segment(s, e, c(-5e-11, 0.), DEFAULT_EPSILON, ExcludeEnd::None));
    }

    #[test]
    fn on_line_ignoring_end_vertices() {
        let line = ring(&[(0., 0.), (1., 0.), (1., 1.)]);
        assert!(point_on_line(c(1., 0.), &line, DEFAULT_EPSILON, true));
        assert!(point_on_line(c(1., 0.5), &line, DEFAULT_EPSILON, true));
        assert!(!point_on_line(c(0., 0.), &line, DEFAULT_EPSILON, true));
        assert!(!point_on_line(c(1., 1.), &line, DEFAULT_EPSILON, true));
        assert!(point_on_line(c(1., 1.), &line, DEFAULT_EPSILON, false));
        assert!(!point_on_line(c(0., 0.), &LineString::new(vec![]), DEFAULT_EPSILON, false));
    }

    #[test]
    fn orientation_signs() {
        let (a, b) = (c(0., 0.), c(1., 0.));
        assert_eq!(orientation(a, b, c(2., 0.)), Orientation::Collinear);
        assert_eq!(orientation(a, b, c(1., 1.)), Orientation::CounterClockwise);
        assert_eq!(orientation(a, b, c(1., -1.)), Orientation::Clockwise);
    }

    #[test]
    fn square_diagonals_intersect() {
        assert!(segments_intersect(c(0., 0.), c(2., 2.), c(0., 2.), c(2., 0.)));
        let pt = segment_intersection_point(c(0., 0.), c(2., 2.), c(0., 2.), c(2., 0.)).unwrap();
        assert_relative_eq!(pt.x, 1.);
        assert_relative_eq!(pt.y, 1.);
    }

    #[test]
    fn disjoint_segments() {
        assert!(!segments_intersect(c(0., 0.), c(1., 0.), c(0., 1.), c(1., 1.)));
        assert!(segment_intersection_point(c(0., 0.), c(1., 0.), c(0., 1.), c(1., 1.)).is_none());
        // Lines cross, but outside the second segment.
        assert!(!segments_intersect(c(0., 0.), c(2., 2.), c(3., 0.), c(2.5, 0.5)));
        assert!(segment_intersection_point(c(0., 0.), c(2., 2.), c(3., 0.), c(2.5, 0.5)).is_none());
    }

    #[test]
    fn shared_end_point_counts_as_intersection() {
        assert!(segments_intersect(c(0., 0.), c(1., 1.), c(1., 1.), c(2., 0.)));
        let pt = segment_intersection_point(c(0., 0.), c(1., 1.), c(1., 1.), c(2., 0.));
        assert_eq!(pt, Some(coord! { x: 1., y: 1. }));
    }

    #[test]
    fn t_junction_intersects() {
        assert!(segments_intersect(c(0., 0.), c(2., 0.), c(1., 0.), c(1., 1.)));
    }

    /// Collinear overlapping segments are not detected. This is a known
    /// limitation of the four-orientation test and is pinned here so a
    /// change in behaviour is noticed.
    #[test]
    fn collinear_overlap_is_not_reported() {
        assert!(!segments_intersect(c(0., 0.), c(2., 0.), c(1., 0.), c(3., 0.)));
        assert!(segment_intersection_point(c(0., 0.), c(2., 0.), c(1., 0.), c(3., 0.)).is_none());
        // Fully contained collinear segment.
        assert!(!segments_intersect(c(0., 0.), c(4., 4.), c(1., 1.), c(2., 2.)));
    }
}
