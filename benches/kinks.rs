use criterion::*;
use geo::Rect;
use geo_predicates::{kinks, Geometry};
use rand::thread_rng;

#[path = "utils/random.rs"]
mod random;
use random::*;

const BBOX: [f64; 2] = [1024., 1024.];

fn random_lines(c: &mut Criterion) {
    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);
    let mut group = c.benchmark_group("kinks - uniform random line");

    for size in [16, 64, 256] {
        let line: Geometry = uniform_line_string(&mut thread_rng(), bbox, size).into();
        group.bench_with_input(BenchmarkId::from_parameter(size), &line, |b, line| {
            b.iter(|| black_box(kinks(line)))
        });
    }
    group.finish();
}

fn simple_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinks - circular polygon");

    for size in [64, 256, 1024] {
        let poly: Geometry = circular_polygon(&mut thread_rng(), size).into();
        group.bench_with_input(BenchmarkId::from_parameter(size), &poly, |b, poly| {
            b.iter(|| black_box(kinks(poly)))
        });
    }
    group.finish();
}

criterion_group!(benches, random_lines, simple_polygons);
criterion_main!(benches);
