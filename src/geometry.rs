use std::fmt::Display;

use geo::{
    coords_iter::CoordsIter, Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

use crate::{KernelError, Result};

/// The geometry kinds handled by the kernel.
///
/// Every operation in this crate matches exhaustively on this tag, so
/// a new kind is a compile error until every algorithm handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point<f64>),
    MultiPoint(MultiPoint<f64>),
    LineString(LineString<f64>),
    MultiLineString(MultiLineString<f64>),
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

/// Fieldless tag of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    /// Topological dimension: 0 for points, 1 for lines, 2 for polygons.
    pub fn dimension(self) -> u8 {
        match self {
            GeometryKind::Point | GeometryKind::MultiPoint => 0,
            GeometryKind::LineString | GeometryKind::MultiLineString => 1,
            GeometryKind::Polygon | GeometryKind::MultiPolygon => 2,
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        };
        f.write_str(name)
    }
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Iterate over every coordinate, rings in order, exterior first.
    pub fn coords(&self) -> Box<dyn Iterator<Item = Coord<f64>> + '_> {
        match self {
            Geometry::Point(p) => Box::new(std::iter::once(p.0)),
            Geometry::MultiPoint(mp) => Box::new(mp.0.iter().map(|p| p.0)),
            Geometry::LineString(ls) => Box::new(ls.0.iter().copied()),
            Geometry::MultiLineString(mls) => Box::new(mls.coords_iter()),
            Geometry::Polygon(poly) => Box::new(poly.coords_iter()),
            Geometry::MultiPolygon(mp) => Box::new(mp.coords_iter()),
        }
    }

    /// Fails on the first NaN or infinite coordinate component.
    pub fn check_finite(&self) -> Result<()> {
        match self.coords().find(|c| !is_finite(*c)) {
            Some(c) => Err(KernelError::NonFiniteCoordinate { x: c.x, y: c.y }),
            None => Ok(()),
        }
    }
}

#[inline]
pub(crate) fn is_finite(c: Coord<f64>) -> bool {
    c.x.is_finite() && c.y.is_finite()
}

macro_rules! impl_from_geo {
    ($($kind:ident),*) => {
        $(
            impl From<$kind<f64>> for Geometry {
                fn from(geom: $kind<f64>) -> Self {
                    Geometry::$kind(geom)
                }
            }
        )*
    };
}
impl_from_geo!(Point, MultiPoint, LineString, MultiLineString, Polygon, MultiPolygon);

/// Accepts the six supported kinds; `Line`, `Rect`, `Triangle` and
/// collections are rejected rather than silently converted.
impl TryFrom<geo::Geometry<f64>> for Geometry {
    type Error = KernelError;

    fn try_from(geom: geo::Geometry<f64>) -> Result<Self> {
        let unsupported =
            |kind: &str| KernelError::Conversion(format!("{kind} geometries are not supported"));
        Ok(match geom {
            geo::Geometry::Point(p) => p.into(),
            geo::Geometry::MultiPoint(mp) => mp.into(),
            geo::Geometry::LineString(ls) => ls.into(),
            geo::Geometry::MultiLineString(mls) => mls.into(),
            geo::Geometry::Polygon(poly) => poly.into(),
            geo::Geometry::MultiPolygon(mp) => mp.into(),
            geo::Geometry::Line(_) => return Err(unsupported("Line")),
            geo::Geometry::Rect(_) => return Err(unsupported("Rect")),
            geo::Geometry::Triangle(_) => return Err(unsupported("Triangle")),
            geo::Geometry::GeometryCollection(_) => return Err(unsupported("GeometryCollection")),
        })
    }
}

impl From<Geometry> for geo::Geometry<f64> {
    fn from(geom: Geometry) -> Self {
        match geom {
            Geometry::Point(p) => p.into(),
            Geometry::MultiPoint(mp) => mp.into(),
            Geometry::LineString(ls) => ls.into(),
            Geometry::MultiLineString(mls) => mls.into(),
            Geometry::Polygon(poly) => poly.into(),
            Geometry::MultiPolygon(mp) => mp.into(),
        }
    }
}

#[cfg(feature = "geojson")]
mod interchange {
    use super::*;

    impl TryFrom<geojson::Geometry> for Geometry {
        type Error = KernelError;

        fn try_from(geom: geojson::Geometry) -> Result<Self> {
            let geom: geo::Geometry<f64> = geom
                .value
                .try_into()
                .map_err(|e: geojson::Error| KernelError::Conversion(e.to_string()))?;
            geom.try_into()
        }
    }

    impl From<&Geometry> for geojson::Geometry {
        fn from(geom: &Geometry) -> Self {
            let geom: geo::Geometry<f64> = geom.clone().into();
            geojson::Geometry::new(geojson::Value::from(&geom))
        }
    }
}
