use geo::Coord;

use crate::{
    kernel::{point_in_multi_polygon, point_in_polygon, point_on_line},
    Geometry,
};

/// Vertex-based containment of `a` in `b`.
///
/// Every vertex of `a` must pass the membership test of `b`; for a
/// polygon `a` only its exterior is tested. A multi polygon `b` must hold
/// all of `a` in one member, except for multi points whose members are
/// placed independently. `a` of higher dimension than `b` is never
/// within it.
pub(crate) fn within(a: &Geometry, b: &Geometry, eps: f64) -> bool {
    if a.kind().dimension() > b.kind().dimension() {
        return false;
    }

    let vertices = tested_vertices(a);
    match b {
        Geometry::MultiPolygon(mp) if !matches!(a, Geometry::MultiPoint(_)) => mp
            .0
            .iter()
            .any(|poly| vertices.iter().all(|c| point_in_polygon(*c, poly, false))),
        _ => vertices.iter().all(|c| holds(b, *c, eps)),
    }
}

fn tested_vertices(geom: &Geometry) -> Vec<Coord<f64>> {
    match geom {
        Geometry::Polygon(poly) => poly.exterior().0.clone(),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .flat_map(|poly| poly.exterior().0.iter().copied())
            .collect(),
        _ => geom.coords().collect(),
    }
}

/// Membership test of a single coordinate in `container`.
fn holds(container: &Geometry, c: Coord<f64>, eps: f64) -> bool {
    match container {
        Geometry::Point(p) => p.0 == c,
        Geometry::MultiPoint(mp) => mp.0.iter().any(|p| p.0 == c),
        Geometry::LineString(ls) => point_on_line(c, ls, eps, false),
        Geometry::MultiLineString(mls) => mls.0.iter().any(|ls| point_on_line(c, ls, eps, false)),
        Geometry::Polygon(poly) => point_in_polygon(c, poly, false),
        Geometry::MultiPolygon(mp) => point_in_multi_polygon(c, mp, false),
    }
}

#[cfg(test)]
mod tests {
    use geo::{line_string, point, polygon, MultiPoint, MultiPolygon};

    use super::*;
    use crate::kernel::DEFAULT_EPSILON;

    const EPS: f64 = DEFAULT_EPSILON;

    fn square(x: f64, y: f64, side: f64) -> geo::Polygon<f64> {
        polygon![
            (x: x, y: y),
            (x: x + side, y: y),
            (x: x + side, y: y + side),
            (x: x, y: y + side),
        ]
    }

    #[test]
    fn point_in_containers() {
        let p: Geometry = point!(x: 1., y: 1.).into();
        assert!(within(&p, &p, EPS));
        assert!(within(&p, &line_string![(x: 0., y: 0.), (x: 2., y: 2.)].into(), EPS));
        assert!(within(&p, &square(0., 0., 2.).into(), EPS));
        assert!(!within(&p, &square(2., 2., 2.).into(), EPS));
        assert!(within(&p, &MultiPoint::from(vec![(0., 0.), (1., 1.)]).into(), EPS));
    }

    #[test]
    fn line_in_polygon() {
        let sq: Geometry = square(0., 0., 4.).into();
        let inner: Geometry = line_string![(x: 1., y: 1.), (x: 2., y: 3.)].into();
        let leaving: Geometry = line_string![(x: 1., y: 1.), (x: 5., y: 3.)].into();
        assert!(within(&inner, &sq, EPS));
        assert!(!within(&leaving, &sq, EPS));
    }

    #[test]
    fn higher_dimension_is_never_within() {
        let sq: Geometry = square(0., 0., 1.).into();
        let line: Geometry = line_string![(x: 0., y: 0.), (x: 1., y: 0.)].into();
        assert!(!within(&sq, &line, EPS));
        assert!(!within(&line, &point!(x: 0., y: 0.).into(), EPS));
    }

    #[test]
    fn polygon_tests_exterior_only() {
        let big: Geometry = square(0., 0., 10.).into();
        let small: Geometry = square(2., 2., 2.).into();
        assert!(within(&small, &big, EPS));
        assert!(!within(&big, &small, EPS));
    }

    #[test]
    fn multi_polygon_needs_one_member() {
        let pair: Geometry = MultiPolygon(vec![square(0., 0., 2.), square(3., 0., 2.)]).into();

        let spanning: Geometry = line_string![(x: 1., y: 1.), (x: 4., y: 1.)].into();
        assert!(!within(&spanning, &pair, EPS));

        let left: Geometry = line_string![(x: 0.5, y: 1.), (x: 1.5, y: 1.)].into();
        assert!(within(&left, &pair, EPS));

        // Multi points are placed member by member.
        let scattered: Geometry = MultiPoint::from(vec![(1., 1.), (4., 1.)]).into();
        assert!(within(&scattered, &pair, EPS));
    }
}
