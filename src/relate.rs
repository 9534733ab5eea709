//! Boolean topological relationships between geometries.
//!
//! Each relationship has a free function using the default [`Config`],
//! and a method on [`Relate`] using a caller-supplied one. The named
//! dispatcher [`relate`] evaluates a [`Relation`] chosen at runtime.
//!
//! Relationships are only defined for some combinations of geometry
//! kinds; the rest fail with
//! [`KernelError::UnsupportedGeometryCombination`] rather than returning
//! a default.
use std::{fmt::Display, str::FromStr};

use geo::{Coord, LineString, MapCoords, Polygon};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Config, Geometry, KernelError, Result};

mod crosses;
mod disjoint;
mod within;

/// A named relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Equal,
    Disjoint,
    Intersects,
    Within,
    Contains,
    Crosses,
    Touches,
    Overlaps,
    Parallel,
    Valid,
    Concave,
}

impl Relation {
    pub const ALL: [Relation; 11] = [
        Relation::Equal,
        Relation::Disjoint,
        Relation::Intersects,
        Relation::Within,
        Relation::Contains,
        Relation::Crosses,
        Relation::Touches,
        Relation::Overlaps,
        Relation::Parallel,
        Relation::Valid,
        Relation::Concave,
    ];

    /// Number of geometries the relationship takes.
    pub fn arity(self) -> usize {
        match self {
            Relation::Valid | Relation::Concave => 1,
            _ => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Disjoint => "disjoint",
            Relation::Intersects => "intersects",
            Relation::Within => "within",
            Relation::Contains => "contains",
            Relation::Crosses => "crosses",
            Relation::Touches => "touches",
            Relation::Overlaps => "overlaps",
            Relation::Parallel => "parallel",
            Relation::Valid => "valid",
            Relation::Concave => "concave",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relation {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Relation::ALL
            .into_iter()
            .find(|rel| rel.name() == lower)
            .ok_or_else(|| KernelError::UnknownRelation(s.to_string()))
    }
}

/// Relationship evaluator holding the numeric tolerances.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Relate {
    config: Config,
}

impl Relate {
    pub fn new(config: Config) -> Self {
        Relate { config }
    }

    /// Evaluate `relation` on `a` and, for binary relationships, `b`.
    pub fn relate(&self, relation: Relation, a: &Geometry, b: Option<&Geometry>) -> Result<bool> {
        debug!(
            "relate {} on {} and {:?}",
            relation,
            a.kind(),
            b.map(Geometry::kind)
        );
        let second = || {
            b.ok_or(KernelError::Arity {
                relation,
                expected: 2,
                found: 1,
            })
        };
        if relation.arity() == 1 && b.is_some() {
            return Err(KernelError::Arity {
                relation,
                expected: 1,
                found: 2,
            });
        }

        match relation {
            Relation::Equal => self.equal(a, second()?),
            Relation::Disjoint => self.disjoint(a, second()?),
            Relation::Intersects => self.intersects(a, second()?),
            Relation::Within => self.within(a, second()?),
            Relation::Contains => self.contains(a, second()?),
            Relation::Crosses => self.crosses(a, second()?),
            Relation::Touches => self.touches(a, second()?),
            Relation::Overlaps => self.overlaps(a, second()?),
            Relation::Parallel => self.parallel(a, second()?),
            Relation::Valid => Ok(crate::is_valid(a)),
            Relation::Concave => self.concave(a),
        }
    }

    /// Same kind, and equal coordinates after rounding to
    /// [`Config::precision`] decimals.
    pub fn equal(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        check_pair(a, b)?;
        if a.kind() != b.kind() {
            return Ok(false);
        }
        let factor = 10f64.powi(self.config.precision.min(MAX_PRECISION) as i32);
        Ok(rounded(a, factor) == rounded(b, factor))
    }

    pub fn disjoint(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        check_pair(a, b)?;
        Ok(disjoint::disjoint(a, b, self.config.epsilon))
    }

    pub fn intersects(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        check_pair(a, b)?;
        Ok(disjoint::intersects(a, b, self.config.epsilon))
    }

    /// Whether every vertex of `a` lies in `b`.
    pub fn within(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        check_pair(a, b)?;
        Ok(within::within(a, b, self.config.epsilon))
    }

    pub fn contains(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        self.within(b, a)
    }

    pub fn crosses(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        use Geometry as G;
        check_pair(a, b)?;
        let eps = self.config.epsilon;
        Ok(match (a, b) {
            (G::LineString(l), G::LineString(m)) => crosses::lines_cross(l, m, eps),
            (G::LineString(ls), G::Polygon(poly)) | (G::Polygon(poly), G::LineString(ls)) => {
                crosses::line_crosses_polygon(ls, poly, eps)
            }
            (G::MultiPoint(mp), G::LineString(ls)) | (G::LineString(ls), G::MultiPoint(mp)) => {
                crosses::multi_point_crosses_line(mp, ls, eps)
            }
            (G::MultiPoint(mp), G::Polygon(poly)) | (G::Polygon(poly), G::MultiPoint(mp)) => {
                crosses::multi_point_crosses_polygon(mp, poly)
            }
            _ => return Err(unsupported(Relation::Crosses, a, b)),
        })
    }

    pub fn touches(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        use Geometry as G;
        check_pair(a, b)?;
        let eps = self.config.epsilon;
        Ok(match (a, b) {
            (G::Point(p), G::LineString(ls)) | (G::LineString(ls), G::Point(p)) => {
                end_points(ls).contains(&p.0)
            }
            (G::LineString(l), G::LineString(m)) => {
                let ends = end_points(m);
                end_points(l).iter().any(|c| ends.contains(c))
            }
            (G::LineString(ls), G::Polygon(poly)) | (G::Polygon(poly), G::LineString(ls)) => {
                let ends = end_points(ls);
                rings(poly).flat_map(|ring| ring.0.iter()).any(|c| ends.contains(c))
            }
            (G::Point(p), G::Polygon(poly)) | (G::Polygon(poly), G::Point(p)) => rings(poly)
                .any(|ring| crate::kernel::point_on_line(p.0, ring, eps, false)),
            _ => return Err(unsupported(Relation::Touches, a, b)),
        })
    }

    pub fn overlaps(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        use Geometry as G;
        check_pair(a, b)?;
        if a.kind() != b.kind() {
            return Err(unsupported(Relation::Overlaps, a, b));
        }
        match (a, b) {
            (G::MultiPoint(p), G::MultiPoint(q)) => Ok(p.0.iter().any(|c| q.0.contains(c))),
            (G::Point(_), _) => Err(unsupported(Relation::Overlaps, a, b)),
            _ => self.intersects(a, b),
        }
    }

    /// Index-paired segments, up to the shorter line, point in the same
    /// or opposite direction.
    pub fn parallel(&self, a: &Geometry, b: &Geometry) -> Result<bool> {
        check_pair(a, b)?;
        match (a, b) {
            (Geometry::LineString(l), Geometry::LineString(m)) => Ok(l
                .lines()
                .zip(m.lines())
                .all(|(s, t)| same_slope(slope(s.delta()), slope(t.delta())))),
            _ => Err(unsupported(Relation::Parallel, a, b)),
        }
    }

    pub fn concave(&self, a: &Geometry) -> Result<bool> {
        a.check_finite()?;
        match a {
            Geometry::Polygon(poly) => Ok(crate::is_concave(poly)),
            _ => Err(KernelError::UnsupportedGeometry {
                operation: "concave",
                kind: a.kind(),
            }),
        }
    }
}

/// Finite coordinates, and at least one of them.
fn check_pair(a: &Geometry, b: &Geometry) -> Result<()> {
    for geom in [a, b] {
        geom.check_finite()?;
        if geom.coords().next().is_none() {
            return Err(KernelError::EmptyGeometry { kind: geom.kind() });
        }
    }
    Ok(())
}

fn unsupported(relation: Relation, a: &Geometry, b: &Geometry) -> KernelError {
    KernelError::UnsupportedGeometryCombination {
        relation,
        first: a.kind(),
        second: b.kind(),
    }
}

/// Largest decimal precision whose scale factor is a finite `f64`.
const MAX_PRECISION: u32 = f64::MAX_10_EXP as u32;

fn rounded(geom: &Geometry, factor: f64) -> geo::Geometry<f64> {
    let geom: geo::Geometry<f64> = geom.clone().into();
    geom.map_coords(move |c| Coord {
        x: round_to(c.x, factor),
        y: round_to(c.y, factor),
    })
}

/// Values too large to scale are already exact at this precision.
fn round_to(v: f64, factor: f64) -> f64 {
    let scaled = v * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        v
    }
}

fn end_points(ls: &LineString<f64>) -> Vec<Coord<f64>> {
    ls.0.first().into_iter().chain(ls.0.last()).copied().collect()
}

fn rings(poly: &Polygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
    std::iter::once(poly.exterior()).chain(poly.interiors())
}

/// Direction of a segment in degrees.
fn slope(d: Coord<f64>) -> f64 {
    d.y.atan2(d.x).to_degrees()
}

const SLOPE_TOLERANCE: f64 = 1e-9;

fn same_slope(a: f64, b: f64) -> bool {
    let diff = (a - b).rem_euclid(180.);
    diff < SLOPE_TOLERANCE || 180. - diff < SLOPE_TOLERANCE
}

/// Borrowed single-part view of a geometry member.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Part<'a> {
    Point(Coord<f64>),
    Line(&'a LineString<f64>),
    Area(&'a Polygon<f64>),
}

/// Split a geometry into its single-part members.
pub(crate) fn parts(geom: &Geometry) -> Vec<Part<'_>> {
    match geom {
        Geometry::Point(p) => vec![Part::Point(p.0)],
        Geometry::MultiPoint(mp) => mp.0.iter().map(|p| Part::Point(p.0)).collect(),
        Geometry::LineString(ls) => vec![Part::Line(ls)],
        Geometry::MultiLineString(mls) => mls.0.iter().map(Part::Line).collect(),
        Geometry::Polygon(poly) => vec![Part::Area(poly)],
        Geometry::MultiPolygon(mp) => mp.0.iter().map(Part::Area).collect(),
    }
}

macro_rules! default_relation {
    ($($(#[$attr:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name(a: &Geometry, b: &Geometry) -> Result<bool> {
                Relate::default().$name(a, b)
            }
        )*
    };
}

default_relation!(
    /// [`Relate::equal`] with the default precision.
    equal,
    /// [`Relate::disjoint`] with the default tolerance.
    disjoint,
    /// [`Relate::intersects`] with the default tolerance.
    intersects,
    /// [`Relate::within`] with the default tolerance.
    within,
    /// [`Relate::contains`] with the default tolerance.
    contains,
    /// [`Relate::crosses`] with the default tolerance.
    crosses,
    /// [`Relate::touches`] with the default tolerance.
    touches,
    /// [`Relate::overlaps`] with the default tolerance.
    overlaps,
    /// [`Relate::parallel`].
    parallel,
);

/// [`crate::is_valid`] behind the dispatcher signature; never fails.
pub fn valid(a: &Geometry) -> Result<bool> {
    Ok(crate::is_valid(a))
}

pub fn concave(a: &Geometry) -> Result<bool> {
    Relate::default().concave(a)
}

/// Evaluate a named relationship with the default [`Config`].
pub fn relate(relation: Relation, a: &Geometry, b: Option<&Geometry>) -> Result<bool> {
    Relate::default().relate(relation, a, b)
}
