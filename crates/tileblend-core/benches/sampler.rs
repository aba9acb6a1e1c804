//! CPU sampler benchmarks
//!
//! Run with: cargo bench -p tileblend-core

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tileblend_core::{ImageTexture, Resolution, TileBlendParams, TileBlendSampler, Variant, Vec2, render_frame};

fn checker_texture(size: u32) -> ImageTexture {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let on = ((x / 4) + (y / 4)) % 2 == 0;
            let v = if on { 230 } else { 25 };
            data.extend_from_slice(&[v, v / 2, 255 - v, 255]);
        }
    }
    ImageTexture::from_rgba8(size, size, &data).expect("valid checker texture")
}

fn bench_evaluate(c: &mut Criterion) {
    let texture = checker_texture(64);
    let params = TileBlendParams::default();
    let resolution = Resolution::new(1920, 1080);

    let mut group = c.benchmark_group("evaluate");
    for variant in [Variant::Rigid, Variant::Warped] {
        let sampler = TileBlendSampler::new(variant.config());
        group.bench_with_input(BenchmarkId::from_parameter(variant.name()), &sampler, |b, s| {
            b.iter(|| s.evaluate(black_box(Vec2::new(0.31, 0.77)), &params, resolution, &texture))
        });
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let texture = checker_texture(64);
    let params = TileBlendParams::default();

    let mut group = c.benchmark_group("render_frame");
    group.sample_size(10);
    for variant in [Variant::Rigid, Variant::Warped] {
        let sampler = TileBlendSampler::new(variant.config());
        group.bench_function(variant.name(), |b| {
            b.iter(|| render_frame(&sampler, &params, &texture, 320, 180))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_frame);
criterion_main!(benches);
