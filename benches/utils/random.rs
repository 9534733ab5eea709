use std::f64::consts::PI;

use geo::{Coord, LineString, Polygon, Rect};

use rand::Rng;
use rand_distr::{Distribution, Normal, Standard};

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coord<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coord {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

/// Polyline of `size` uniform points; self-intersections are likely.
#[inline]
#[allow(dead_code)]
pub fn uniform_line_string<R: Rng>(rng: &mut R, bounds: Rect<f64>, size: usize) -> LineString<f64> {
    (0..size).map(|_| uniform_point(rng, bounds)).collect()
}

/// Closed star-shaped ring around the origin.
///
/// Vertices sit at jittered, evenly spread angles with radii jittered
/// around 1, so the origin is in the kernel and the ring is simple. Its
/// orientation is picked at random.
#[allow(dead_code)]
pub fn circular_ring<R: Rng>(rng: &mut R, size: usize) -> LineString<f64> {
    let size = size.max(3);
    let jitter = Normal::<f64>::new(0., 0.1).unwrap();
    let step = 2. * PI / size as f64;

    let mut coords: Vec<Coord<f64>> = (0..size)
        .map(|i| {
            let theta = step * (i as f64 + 0.5 * rng.sample::<f64, _>(Standard));
            let r = (1. + jitter.sample(rng)).clamp(0.5, 1.5);
            Coord {
                x: r * theta.cos(),
                y: r * theta.sin(),
            }
        })
        .collect();
    if rng.gen::<bool>() {
        coords.reverse();
    }
    let mut ring = LineString(coords);
    ring.close();
    ring
}

#[allow(dead_code)]
pub fn circular_polygon<R: Rng>(rng: &mut R, size: usize) -> Polygon<f64> {
    Polygon::new(circular_ring(rng, size), vec![])
}
