//! Collision benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- polygon

use clash2d_bench::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

fn bench_primitives(c: &mut Criterion) {
    c.bench_function("primitives/segment_segment", |b| {
        b.iter(|| {
            clash2d::segment_segment(
                std::hint::black_box(Vec2::new(0.0, 0.0)),
                Vec2::new(10.0, 3.0),
                Vec2::new(5.0, -5.0),
                Vec2::new(4.0, 5.0),
            )
        });
    });

    c.bench_function("primitives/segment_circle", |b| {
        b.iter(|| {
            clash2d::segment_circle(
                std::hint::black_box(Vec2::new(-8.0, 1.0)),
                Vec2::new(8.0, -2.0),
                Vec2::new(0.5, 0.25),
                3.0,
            )
        });
    });

    c.bench_function("primitives/circle_overlap_area", |b| {
        b.iter(|| {
            clash2d::circle_overlap_area(
                std::hint::black_box(Vec2::ZERO),
                5.0,
                Vec2::new(4.0, 2.0),
                4.0,
            )
        });
    });
}

// ---------------------------------------------------------------------------
// Polygon tests
// ---------------------------------------------------------------------------

fn bench_polygon(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("polygon/point_in_polygon");
        for &sides in &[4usize, 8, 16, 64] {
            let polygon = regular_polygon(sides, 10.0, 1).unwrap();
            let view = polygon.select_view(0.0).unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(sides), &sides, |b, _| {
                b.iter(|| view.contains(Vec2::ZERO, std::hint::black_box(Vec2::new(3.0, 2.0))));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("polygon/polygon_polygon");
        for &sides in &[4usize, 8, 16] {
            let a = regular_polygon(sides, 10.0, 1).unwrap();
            let b_poly = star_polygon(sides, 4.0, 9.0, 1).unwrap();
            let view_a = a.select_view(0.0).unwrap();
            let view_b = b_poly.select_view(0.0).unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(sides), &sides, |b, _| {
                b.iter(|| {
                    clash2d::polygon_polygon(
                        view_a,
                        Vec2::ZERO,
                        view_b,
                        std::hint::black_box(Vec2::new(14.0, 0.0)),
                    )
                });
            });
        }
        group.finish();
    }

    c.bench_function("polygon/select_view", |b| {
        let polygon = regular_polygon(8, 10.0, 32).unwrap();
        b.iter(|| polygon.select_view(std::hint::black_box(2.1)));
    });
}

// ---------------------------------------------------------------------------
// Pixel scans
// ---------------------------------------------------------------------------

fn bench_pixel_scans(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("pixel/sprite_sprite");
        for &size in &[16u32, 32, 64] {
            let map = CheckerMap {
                width: size,
                height: size,
            };
            let a = checker_sprite(&map);
            let b_sprite = checker_sprite(&map);
            let offset = Vec2::new(size as f32 * 0.5, 1.0);
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    clash2d::sprite_sprite(&a, Vec2::ZERO, &b_sprite, std::hint::black_box(offset))
                });
            });
        }
        group.finish();
    }

    c.bench_function("pixel/segment_sprite", |b| {
        let map = CheckerMap {
            width: 64,
            height: 64,
        };
        let sprite = checker_sprite(&map);
        b.iter(|| {
            clash2d::segment_sprite(
                std::hint::black_box(Vec2::new(-80.0, 5.0)),
                Vec2::new(80.0, -3.0),
                &sprite,
                Vec2::ZERO,
            )
        });
    });

    c.bench_function("pixel/circle_sprite", |b| {
        let map = CheckerMap {
            width: 64,
            height: 64,
        };
        let sprite = checker_sprite(&map);
        b.iter(|| {
            clash2d::circle_sprite(
                std::hint::black_box(Vec2::new(40.0, 0.0)),
                12.0,
                &sprite,
                Vec2::ZERO,
            )
        });
    });
}

criterion_group!(benches, bench_primitives, bench_polygon, bench_pixel_scans);
criterion_main!(benches);
