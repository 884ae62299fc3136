//! Benchmark for pointer-to-value mapping.
//!
//! Run with: cargo bench --package axisbar_core --bench mapping_benchmark

#![allow(missing_docs)]

use std::hint::black_box;

use axisbar_core::{map_coordinate_to_value, quantize, Axis, BarConfiguration, Quantization};
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark_drag_stream(c: &mut Criterion) {
    let config = BarConfiguration::new().with_quantization(Quantization::HalfStep);
    let extent = config.bar_extent();

    // One pointer event per pixel across the bar, as a fast drag would produce
    c.bench_function("map_drag_stream_220px", |b| {
        b.iter(|| {
            let mut last = 0.0;
            for x in 0..220u16 {
                last = map_coordinate_to_value(black_box(f32::from(x)), extent, &config)
                    .unwrap_or(last);
            }
            black_box(last)
        });
    });
}

fn benchmark_vertical_whole_step(c: &mut Criterion) {
    let config = BarConfiguration::new()
        .with_axis(Axis::Vertical)
        .with_quantization(Quantization::WholeStep);
    let extent = config.bar_extent();

    c.bench_function("map_single_vertical_whole_step", |b| {
        b.iter(|| map_coordinate_to_value(black_box(137.5), black_box(extent), &config));
    });
}

fn benchmark_quantize(c: &mut Criterion) {
    c.bench_function("quantize_half_step", |b| {
        let mut r = 0.0_f32;
        b.iter(|| {
            r = (r + 0.013) % 1.2;
            black_box(quantize(black_box(r), Quantization::HalfStep, 5))
        });
    });
}

criterion_group!(
    benches,
    benchmark_drag_stream,
    benchmark_vertical_whole_step,
    benchmark_quantize,
);
criterion_main!(benches);
