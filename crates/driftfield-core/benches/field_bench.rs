//! Benchmarks for the particle field step and draw pass.
//!
//! Performance budgets (one 60 Hz frame is ~16.6ms):
//! - `advance` at the 150-particle cap: < 20μs
//! - `render` at the cap (O(n²) pair scan included): < 250μs
//!
//! Run with: cargo bench -p driftfield-core --bench field_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use driftfield_core::{FieldParams, FrameLoop, ParticleField, RecordingSurface, Viewport};

// =============================================================================
// Viewport Configurations
// =============================================================================

/// Common viewport sizes; the last ones hit the population cap.
const SIZES: &[(f64, f64, &str)] = &[
    (375.0, 667.0, "375x667"),     // Phone
    (800.0, 600.0, "800x600"),     // Small window
    (1280.0, 800.0, "1280x800"),   // Laptop
    (1920.0, 1080.0, "1920x1080"), // Desktop
];

fn field(width: f64, height: f64) -> ParticleField {
    let mut field =
        ParticleField::seeded(Viewport::new(width, height), FieldParams::default(), 0xD1F7)
            .expect("default params");
    field.on_pointer_move(width / 2.0, height / 2.0);
    field
}

// =============================================================================
// Step / Draw
// =============================================================================

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/advance");

    for &(width, height, name) in SIZES {
        let mut field = field(width, height);
        group.throughput(Throughput::Elements(field.particles().len() as u64));
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                field.advance();
                black_box(field.particles());
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/render");

    for &(width, height, name) in SIZES {
        let field = field(width, height);
        let mut surface = RecordingSurface::new();
        group.throughput(Throughput::Elements(field.particles().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &field, |b, field| {
            let mut t = 0.0;
            b.iter(|| {
                surface.clear();
                t += 16.0;
                black_box(field.render(&mut surface, t))
            })
        });
    }

    group.finish();
}

// =============================================================================
// Full Frame
// =============================================================================

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/frame");

    for &(width, height, name) in SIZES {
        let mut field = field(width, height);
        let mut surface = RecordingSurface::new();
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        group.bench_function(BenchmarkId::new("pressed", name), |b| {
            field.set_pressed(true);
            let mut t = 0.0;
            b.iter(|| {
                surface.clear();
                t += 16.0;
                black_box(frame_loop.tick(&mut field, &mut surface, t))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_render, bench_frame);
criterion_main!(benches);
