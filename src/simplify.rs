//! Ramer–Douglas–Peucker simplification.
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use itertools::Itertools;
use log::trace;

use crate::{Config, Geometry, KernelError, Result};

/// Distance from `point` to the segment `start`-`end`, or to `start`
/// when the segment has no length.
fn segment_distance(point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> f64 {
    let d = end - start;
    let squared_length = d.x * d.x + d.y * d.y;
    if squared_length == 0. {
        return (point - start).x.hypot((point - start).y);
    }

    let t = ((point.x - start.x) * d.x + (point.y - start.y) * d.y) / squared_length;
    let nearest = if t < 0. {
        start
    } else if t > 1. {
        end
    } else {
        start + d * t
    };
    (point.x - nearest.x).hypot(point.y - nearest.y)
}

/// Ramer–Douglas–Peucker over a coordinate sequence.
///
/// The first and last coordinates are always kept. A closed sequence
/// measures distances from its start point, since its first and last
/// coordinates coincide.
pub fn rdp(points: &[Coord<f64>], epsilon: f64) -> Vec<Coord<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let (first, last) = (points[0], points[points.len() - 1]);
    let (index, max) = points[1..points.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, p)| (i + 1, segment_distance(*p, first, last)))
        .fold((0, 0.), |best, cur| if cur.1 > best.1 { cur } else { best });

    if max > epsilon {
        let mut head = rdp(&points[..=index], epsilon);
        head.pop();
        head.extend(rdp(&points[index..], epsilon));
        head
    } else {
        vec![first, last]
    }
}

fn has_three_distinct(coords: &[Coord<f64>]) -> bool {
    coords
        .iter()
        .map(|c| (c.x.to_bits(), c.y.to_bits()))
        .unique()
        .nth(2)
        .is_some()
}

/// Simplify a polygon ring without collapsing it.
///
/// The ring needs at least four positions, three of them distinct. When
/// the simplified ring keeps fewer than three distinct positions or
/// stops being closed, the tolerance is scaled by
/// [`Config::simplify_decay`] and the ring simplified again. If the
/// tolerance underflows first, the ring is returned as is.
pub fn simplify_ring(
    ring: &LineString<f64>,
    epsilon: f64,
    config: &Config,
) -> Result<LineString<f64>> {
    if ring.0.len() < 4 || !has_three_distinct(&ring.0) {
        return Err(KernelError::DegenerateRing {
            positions: ring.0.len(),
        });
    }

    let decay = config.decay();
    let mut epsilon = epsilon;
    let mut simplified = rdp(&ring.0, epsilon);
    while !(has_three_distinct(&simplified) && simplified.first() == simplified.last()) {
        if epsilon < f64::MIN_POSITIVE {
            trace!("tolerance underflow, keeping the ring unsimplified");
            return Ok(ring.clone());
        }
        epsilon *= decay;
        trace!("ring collapsed to {} positions, retrying with {}", simplified.len(), epsilon);
        simplified = rdp(&ring.0, epsilon);
    }

    let mut simplified = LineString(simplified);
    simplified.close();
    Ok(simplified)
}

fn simplify_polygon(poly: &Polygon<f64>, epsilon: f64, config: &Config) -> Result<Polygon<f64>> {
    let exterior = simplify_ring(poly.exterior(), epsilon, config)?;
    let interiors = poly
        .interiors()
        .iter()
        .map(|ring| simplify_ring(ring, epsilon, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// [`simplify_with_config`] using the default [`Config`].
pub fn simplify(geom: &Geometry, tolerance: f64) -> Result<Geometry> {
    simplify_with_config(geom, tolerance, &Config::default())
}

/// Simplify lines with [`rdp`] and polygon rings with [`simplify_ring`].
///
/// Points are returned unchanged. The tolerance must be finite and not
/// negative.
pub fn simplify_with_config(geom: &Geometry, tolerance: f64, config: &Config) -> Result<Geometry> {
    if !tolerance.is_finite() || tolerance < 0. {
        return Err(KernelError::InvalidTolerance(tolerance));
    }
    geom.check_finite()?;

    let line = |ls: &LineString<f64>| LineString(rdp(&ls.0, tolerance));
    Ok(match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => geom.clone(),
        Geometry::LineString(ls) => Geometry::LineString(line(ls)),
        Geometry::MultiLineString(mls) => {
            Geometry::MultiLineString(MultiLineString(mls.0.iter().map(line).collect()))
        }
        Geometry::Polygon(poly) => Geometry::Polygon(simplify_polygon(poly, tolerance, config)?),
        Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon(
            mp.0.iter()
                .map(|poly| simplify_polygon(poly, tolerance, config))
                .collect::<Result<_>>()?,
        )),
    })
}
