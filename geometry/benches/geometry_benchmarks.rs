use criterion::{Criterion, black_box, criterion_group, criterion_main};

use redlilium_geometry::draw::{Entity, ViewportTarget};
use redlilium_geometry::math::{Mat4, Point};
use redlilium_geometry::mesh::generators::{generate_circle_fan, generate_rect_fan};
use redlilium_geometry::mesh::{VerticesGeometry, unroll_fan_indices};
use redlilium_geometry::transient::HostTransientBuffer;
use redlilium_geometry::Rect;

// ---------------------------------------------------------------------------
// Fan normalization
// ---------------------------------------------------------------------------

fn bench_unroll_implicit_fan(c: &mut Criterion) {
    let vertices = generate_circle_fan(Point::zeros(), 1.0, 1024).vertices;
    let no_indices: &[u16] = &[];
    c.bench_function("unroll_implicit_fan_1024", |b| {
        b.iter(|| unroll_fan_indices(black_box(&vertices), black_box(no_indices)));
    });
}

fn bench_unroll_explicit_fan(c: &mut Criterion) {
    let vertices = generate_circle_fan(Point::zeros(), 1.0, 1024).vertices;
    let indices: Vec<u16> = (0..vertices.len() as u16).rev().collect();
    c.bench_function("unroll_explicit_fan_1024", |b| {
        b.iter(|| unroll_fan_indices(black_box(&vertices), black_box(&indices)));
    });
}

fn bench_construct_circle(c: &mut Criterion) {
    c.bench_function("vertices_geometry_circle_256", |b| {
        b.iter(|| VerticesGeometry::new(generate_circle_fan(Point::zeros(), 1.0, black_box(256))));
    });
}

// ---------------------------------------------------------------------------
// Buffer builders
// ---------------------------------------------------------------------------

fn circle() -> Option<VerticesGeometry> {
    VerticesGeometry::new(generate_circle_fan(Point::new(100.0, 100.0), 50.0, 256)).ok()
}

fn bench_position_buffer(c: &mut Criterion) {
    let Some(geometry) = circle() else { return };
    let entity = Entity::default();
    let target = ViewportTarget::new(1920, 1080);
    let mut arena = HostTransientBuffer::new();
    c.bench_function("position_buffer_circle_256", |b| {
        b.iter(|| {
            arena.reset();
            black_box(geometry.position_buffer(&mut arena, &entity, &target))
        });
    });
}

fn bench_position_color_buffer(c: &mut Criterion) {
    let Some(geometry) = circle() else { return };
    let entity = Entity::default();
    let target = ViewportTarget::new(1920, 1080);
    let mut arena = HostTransientBuffer::new();
    c.bench_function("position_color_buffer_circle_256", |b| {
        b.iter(|| {
            arena.reset();
            black_box(geometry.position_color_buffer(&mut arena, &entity, &target))
        });
    });
}

fn bench_position_uv_color_buffer(c: &mut Criterion) {
    let Ok(geometry) = VerticesGeometry::new(generate_rect_fan(Rect::from_xywh(
        0.0, 0.0, 256.0, 256.0,
    ))) else {
        return;
    };
    let coverage = geometry.bounds();
    let entity = Entity::default();
    let target = ViewportTarget::new(1920, 1080);
    let mut arena = HostTransientBuffer::new();
    c.bench_function("position_uv_color_buffer_rect", |b| {
        b.iter(|| {
            arena.reset();
            black_box(geometry.position_uv_color_buffer(
                coverage,
                &Mat4::identity(),
                &mut arena,
                &entity,
                &target,
            ))
        });
    });
}

criterion_group!(
    fan_benches,
    bench_unroll_implicit_fan,
    bench_unroll_explicit_fan,
    bench_construct_circle,
);

criterion_group!(
    buffer_benches,
    bench_position_buffer,
    bench_position_color_buffer,
    bench_position_uv_color_buffer,
);

criterion_main!(fan_benches, buffer_benches);
