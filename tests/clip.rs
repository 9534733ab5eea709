use std::error::Error;

use geo::{Coord, LineString};
use geo_predicates::{
    bbox_clip, is_valid, kernel, kinks, rewind, simplify, BoundingBox, Geometry, KernelError,
};
use wkt::TryFromWkt;

fn geom(wkt: &str) -> Result<Geometry, Box<dyn Error>> {
    let geom = geo::Geometry::<f64>::try_from_wkt_str(wkt)?;
    Ok(Geometry::try_from(geom)?)
}

#[test]
fn unit_square_clipped_in_half() -> Result<(), Box<dyn Error>> {
    let square = geom("POLYGON((0 0,1 0,1 1,0 1,0 0))")?;
    let bbox = BoundingBox::try_from(&[0.5, -1., 2., 2.][..])?;

    let clipped = bbox_clip(&square, &bbox)?;
    assert_eq!(clipped, geom("POLYGON((0.5 0,1 0,1 1,0.5 1,0.5 0))")?);
    Ok(())
}

#[test]
fn clipping_inside_geometry_is_identity() -> Result<(), Box<dyn Error>> {
    let bbox = BoundingBox::from([-100., -100., 100., 100.]);
    for wkt in [
        "POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,2 4,4 4,4 2,2 2))",
        "LINESTRING(0 0,3 4,5 -1)",
        "MULTILINESTRING((0 0,1 1),(2 2,3 1))",
    ] {
        let g = geom(wkt)?;
        assert_eq!(bbox_clip(&g, &bbox)?, g);
    }
    Ok(())
}

#[test]
fn clip_rejects_bad_boxes() {
    assert_eq!(
        BoundingBox::try_from(&[0., 0., 1.][..]),
        Err(KernelError::InvalidBoundingBox { len: 3 })
    );
}

#[test]
fn line_is_simplified() -> Result<(), Box<dyn Error>> {
    let line = geom("LINESTRING(0 0,0.1 0.1,0.2 0,1 0)")?;
    assert_eq!(simplify(&line, 0.15)?, geom("LINESTRING(0 0,1 0)")?);
    Ok(())
}

#[test]
fn figure_eight_has_one_kink() -> Result<(), Box<dyn Error>> {
    let bowtie = geom("POLYGON((0 0,1 1,0 1,1 0,0 0))")?;
    let found = kinks(&bowtie)?;
    assert_eq!(found.0.len(), 1);
    let kink = found.0[0];
    assert!((kink.x() - 0.5).abs() < 0.01 && (kink.y() - 0.5).abs() < 0.01);

    assert!(!is_valid(&bowtie));
    assert!(kinks(&geom("POLYGON((0 0,1 0,1 1,0 1,0 0))")?)?.0.is_empty());
    Ok(())
}

#[test]
fn diagonals_intersect() {
    let c = |x, y| Coord { x, y };
    assert!(kernel::segments_intersect(c(0., 0.), c(2., 2.), c(0., 2.), c(2., 0.)));
    assert_eq!(
        kernel::segment_intersection_point(c(0., 0.), c(2., 2.), c(0., 2.), c(2., 0.)),
        Some(c(1., 1.))
    );
}

#[test]
fn reversed_ring_flips_winding() {
    let ring: LineString<f64> = vec![(0., 0.), (3., 1.), (2., 4.), (-1., 2.), (0., 0.)].into();
    let mut reversed = ring.clone();
    reversed.0.reverse();
    assert_eq!(kernel::is_clockwise(&ring.0), !kernel::is_clockwise(&reversed.0));
}

#[test]
fn rewound_polygon_is_counter_clockwise() -> Result<(), Box<dyn Error>> {
    let cw = geom("POLYGON((0 0,0 10,10 10,10 0,0 0),(2 2,4 2,4 4,2 4,2 2))")?;
    match rewind(&cw, false) {
        Geometry::Polygon(poly) => {
            assert!(!kernel::is_clockwise(&poly.exterior().0));
            assert!(kernel::is_clockwise(&poly.interiors()[0].0));
        }
        other => panic!("expected a polygon, got {:?}", other.kind()),
    }
    Ok(())
}
