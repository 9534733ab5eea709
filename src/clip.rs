//! Clipping of lines and polygons to an axis-aligned box.
//!
//! Lines are clipped segment by segment with Cohen–Sutherland; polygon
//! rings with Sutherland–Hodgman. Clipped rings are not rewound.
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use log::debug;

use crate::{BoundingBox, Geometry, KernelError, Result};

mod segment;
pub use segment::clip_segment;

mod ring;
pub use ring::clip_ring;

/// Clip every segment of `line` and join the surviving pieces.
///
/// Pieces are concatenated in order even when the line leaves and
/// re-enters the box; shared end points are emitted once.
pub fn clip_line(line: &LineString<f64>, bbox: &BoundingBox) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = vec![];
    let mut push = |c: Coord<f64>| {
        if coords.last() != Some(&c) {
            coords.push(c);
        }
    };
    for l in line.lines() {
        if let Some((a, b)) = clip_segment(l.start, l.end, bbox) {
            push(a);
            push(b);
        }
    }
    LineString(coords)
}

/// Clip the exterior and every hole of `poly` independently.
///
/// Degenerate holes are dropped; a degenerate exterior clips the whole
/// polygon away.
pub fn clip_polygon(poly: &Polygon<f64>, bbox: &BoundingBox) -> Option<Polygon<f64>> {
    let exterior = clip_ring(poly.exterior(), bbox)?;
    let interiors = poly
        .interiors()
        .iter()
        .filter_map(|ring| clip_ring(ring, bbox))
        .collect();
    Some(Polygon::new(exterior, interiors))
}

fn empty_polygon() -> Polygon<f64> {
    Polygon::new(LineString::new(vec![]), vec![])
}

fn empty_like(geom: &Geometry) -> Geometry {
    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => geom.clone(),
        Geometry::LineString(_) => Geometry::LineString(LineString::new(vec![])),
        Geometry::MultiLineString(_) => Geometry::MultiLineString(MultiLineString(vec![])),
        Geometry::Polygon(_) => Geometry::Polygon(empty_polygon()),
        Geometry::MultiPolygon(_) => Geometry::MultiPolygon(MultiPolygon(vec![])),
    }
}

/// Clip `geom` to `bbox`.
///
/// Geometries whose bounding box lies inside `bbox` are returned as is,
/// and those whose box misses it come back empty without running the
/// clippers. Empty members of multi geometries are dropped.
pub fn bbox_clip(geom: &Geometry, bbox: &BoundingBox) -> Result<Geometry> {
    geom.check_finite()?;
    let extent = BoundingBox::of(geom);

    let clipped = match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => {
            return Err(KernelError::UnsupportedGeometry {
                operation: "bbox_clip",
                kind: geom.kind(),
            })
        }
        _ if bbox.contains(&extent) => {
            debug!("{} lies inside the clip box", geom.kind());
            geom.clone()
        }
        _ if !bbox.intersects(&extent) => {
            debug!("{} misses the clip box", geom.kind());
            empty_like(geom)
        }
        Geometry::LineString(ls) => Geometry::LineString(clip_line(ls, bbox)),
        Geometry::MultiLineString(mls) => Geometry::MultiLineString(MultiLineString(
            mls.0
                .iter()
                .map(|ls| clip_line(ls, bbox))
                .filter(|ls| !ls.0.is_empty())
                .collect(),
        )),
        Geometry::Polygon(poly) => {
            Geometry::Polygon(clip_polygon(poly, bbox).unwrap_or_else(empty_polygon))
        }
        Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon(
            mp.0.iter().filter_map(|poly| clip_polygon(poly, bbox)).collect(),
        )),
    };
    Ok(clipped)
}
