//! Self-intersection ("kink") detection.
//!
//! Every pair of segments drawn from the input's lines and rings is
//! tested with [`segment_intersection_point`]. This is quadratic in the
//! number of segments; there is no spatial index.
use geo::{Coord, LineString, MultiPoint, Point};
use itertools::Itertools;
use log::debug;

use crate::{kernel::segment_intersection_point, Geometry, KernelError, Result};

/// Intersection points of the segments of `geom` with each other.
///
/// Within a single line, adjacent segments are skipped, as is the pair
/// formed by the first and last segment of a closed line. Segments of
/// different lines are always compared. Points are reported once per
/// intersecting pair, so a crossing at a shared vertex may appear more
/// than once.
pub fn kinks(geom: &Geometry) -> Result<MultiPoint<f64>> {
    let lines: Vec<&LineString<f64>> = match geom {
        Geometry::LineString(ls) => vec![ls],
        Geometry::MultiLineString(mls) => mls.0.iter().collect(),
        Geometry::Polygon(poly) => rings(poly).collect(),
        Geometry::MultiPolygon(mp) => mp.0.iter().flat_map(rings).collect(),
        Geometry::Point(_) | Geometry::MultiPoint(_) => {
            return Err(KernelError::UnsupportedGeometry {
                operation: "kinks",
                kind: geom.kind(),
            })
        }
    };

    let mut found = vec![];
    for (idx, line) in lines.iter().enumerate() {
        self_kinks(line, &mut found);
        for other in &lines[idx + 1..] {
            cross_kinks(line, other, &mut found);
        }
    }
    debug!("found {} kinks in {}", found.len(), geom.kind());
    Ok(found.into_iter().map(Point::from).collect())
}

fn rings(poly: &geo::Polygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
    std::iter::once(poly.exterior()).chain(poly.interiors())
}

fn self_kinks(line: &LineString<f64>, found: &mut Vec<Coord<f64>>) {
    let segments = line.lines().collect_vec();
    let last = segments.len().saturating_sub(1);
    let closed = line.is_closed();

    for ((i, a), (k, b)) in segments.iter().enumerate().tuple_combinations() {
        if k == i + 1 || (closed && i == 0 && k == last) {
            continue;
        }
        if let Some(pt) = segment_intersection_point(a.start, a.end, b.start, b.end) {
            debug!("kink at {:?} between segments {} and {}", pt, i, k);
            found.push(pt);
        }
    }
}

fn cross_kinks(line: &LineString<f64>, other: &LineString<f64>, found: &mut Vec<Coord<f64>>) {
    for (a, b) in line.lines().cartesian_product(other.lines().collect_vec()) {
        if let Some(pt) = segment_intersection_point(a.start, a.end, b.start, b.end) {
            debug!("kink at {:?} between two lines", pt);
            found.push(pt);
        }
    }
}
