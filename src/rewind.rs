use geo::{winding_order::WindingOrder, MultiLineString, MultiPolygon, Polygon};

use crate::{
    utils::{winding_inverse, wind_to},
    Geometry,
};

/// Orient `geom` to the interchange-format rule.
///
/// Polygon exteriors are wound counter-clockwise and holes clockwise;
/// line strings are wound clockwise. `reverse` flips every target
/// orientation. Points are returned unchanged.
pub fn rewind(geom: &Geometry, reverse: bool) -> Geometry {
    let (exterior, line) = if reverse {
        (WindingOrder::Clockwise, WindingOrder::CounterClockwise)
    } else {
        (WindingOrder::CounterClockwise, WindingOrder::Clockwise)
    };

    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => geom.clone(),
        Geometry::LineString(ls) => Geometry::LineString(wind_to(ls, line)),
        Geometry::MultiLineString(mls) => Geometry::MultiLineString(MultiLineString(
            mls.0.iter().map(|ls| wind_to(ls, line)).collect(),
        )),
        Geometry::Polygon(poly) => Geometry::Polygon(rewind_polygon(poly, exterior)),
        Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon(
            mp.0.iter().map(|poly| rewind_polygon(poly, exterior)).collect(),
        )),
    }
}

fn rewind_polygon(poly: &Polygon<f64>, exterior: WindingOrder) -> Polygon<f64> {
    let hole = winding_inverse(exterior);
    Polygon::new(
        wind_to(poly.exterior(), exterior),
        poly.interiors().iter().map(|ring| wind_to(ring, hole)).collect(),
    )
}
