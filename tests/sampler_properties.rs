//! Sampler properties checked across the public API
//!
//! These run on the CPU reference sampler; the WGSL shader mirrors it.

mod common;

use common::{checker_texture, correlation, gradient_texture, lattice_grid};
use tileblend_core::raster::pixel_uv;
use tileblend_core::sampler::to_square_uv;
use tileblend_core::{
    HashKind, LatticeHash, Resolution, SamplerConfig, ScalarHash, Texture, TileBlendParams,
    TileBlendSampler, Variant, Vec2, VectorHash, Wave, render_frame,
};

fn both_variants() -> [TileBlendSampler; 2] {
    [
        TileBlendSampler::new(Variant::Rigid.config()),
        TileBlendSampler::new(Variant::Warped.config()),
    ]
}

fn sample_points() -> Vec<Vec2> {
    (0..=12)
        .flat_map(|i| (0..=12).map(move |j| Vec2::new(i as f32 / 12.0, j as f32 / 12.0)))
        .collect()
}

// === Determinism ===

#[test]
fn test_evaluation_is_bit_identical() {
    let texture = gradient_texture();
    let params = TileBlendParams {
        rotation: 0.63,
        blend_falloff: 17.0,
        blend_offset: 1.4,
        scale: 2.3,
        wave: Wave { amplitude: 0.35, period: 1.7 },
    };
    let resolution = Resolution::new(640, 360);

    for sampler in both_variants() {
        for uv0 in sample_points() {
            let a = sampler.evaluate(uv0, &params, resolution, &texture);
            let b = sampler.evaluate(uv0, &params, resolution, &texture);
            assert_eq!(
                [a.r.to_bits(), a.g.to_bits(), a.b.to_bits(), a.a.to_bits()],
                [b.r.to_bits(), b.g.to_bits(), b.b.to_bits(), b.a.to_bits()],
                "non-deterministic at {:?}",
                uv0
            );
        }
    }
}

#[test]
fn test_frames_are_identical() {
    let texture = checker_texture();
    let params = TileBlendParams::default();
    for sampler in both_variants() {
        let first = render_frame(&sampler, &params, &texture, 48, 32);
        let second = render_frame(&sampler, &params, &texture, 48, 32);
        assert_eq!(first, second);
    }
}

// === Hash decorrelation ===

fn neighbour_correlation(hash: &impl LatticeHash, offset: Vec2) -> f32 {
    let grid = lattice_grid(8);
    let here: Vec<f32> = grid.iter().map(|&p| hash.hash(p)).collect();
    let there: Vec<f32> = grid.iter().map(|&p| hash.hash(p + offset)).collect();
    correlation(&here, &there)
}

const NEIGHBOURS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
];

#[test]
fn test_vector_hash_has_weak_neighbour_correlation() {
    for offset in NEIGHBOURS {
        let r = neighbour_correlation(&VectorHash, offset);
        assert!(r.abs() < 0.1, "offset {:?}: r = {}", offset, r);
    }
}

#[test]
fn test_scalar_hash_has_weak_neighbour_correlation() {
    for offset in NEIGHBOURS {
        let r = neighbour_correlation(&ScalarHash, offset);
        assert!(r.abs() < 0.1, "offset {:?}: r = {}", offset, r);
    }
}

#[test]
fn test_hash_values_are_spread() {
    for hash in [HashKind::Vector, HashKind::Scalar] {
        let values: Vec<f32> = lattice_grid(8).into_iter().map(|p| hash.hash(p)).collect();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));

        let low = values.iter().filter(|&&v| v < 0.5).count();
        let high = values.len() - low;
        assert!(low > 40 && high > 40, "{:?}: {} low / {} high", hash, low, high);
    }
}

// === Blend continuity ===

#[test]
fn test_weight_is_continuous_across_equidistant_point() {
    let sampler = TileBlendSampler::default();
    // Diagonal from a corner point (0, 0) to a center point (0.5, 0.5);
    // both distances are equal at t = 0.25
    for falloff in [0.5, 5.0, 20.0, 50.0] {
        let params = TileBlendParams {
            blend_falloff: falloff,
            blend_offset: 1.0,
            ..TileBlendParams::default()
        };
        let weight = |t: f32| sampler.lookup(Vec2::splat(t), &params).weight;

        let eps = 1e-4;
        let jump = (weight(0.25 - eps) - weight(0.25 + eps)).abs();
        assert!(jump <= 4.0 * falloff * eps + 1e-5, "falloff {}: jump {}", falloff, jump);
    }
}

#[test]
fn test_weight_has_no_jumps_along_a_sweep() {
    let step = 1e-3;
    for variant in [Variant::Rigid, Variant::Warped] {
        let sampler = TileBlendSampler::new(variant.config());
        for falloff in [1.0, 10.0, 20.0] {
            let params = TileBlendParams {
                blend_falloff: falloff,
                wave: Wave { amplitude: 0.0, period: 2.0 },
                ..TileBlendParams::default()
            };
            // Crosses several corner and center cell boundaries
            let mut previous = sampler.lookup(Vec2::new(-1.3, 0.1), &params).weight;
            for i in 1..=2600 {
                let x = -1.3 + i as f32 * step;
                let weight = sampler.lookup(Vec2::new(x, 0.1), &params).weight;
                let jump = (weight - previous).abs();
                assert!(
                    jump <= 3.0 * falloff * step + 1e-4,
                    "{:?} falloff {}: jump {} at x = {}",
                    variant,
                    falloff,
                    jump,
                    x
                );
                previous = weight;
            }
        }
    }
}

// === Wrap ===

#[test]
fn test_texture_repeat_law() {
    let texture = gradient_texture();
    let wrapped = texture.sample(Vec2::new(1.3, -0.2));
    let direct = texture.sample(Vec2::new(0.3, 0.8));
    common::assert_color_near(wrapped, direct, 1e-4);

    // Dyadic coordinates wrap exactly
    assert_eq!(
        texture.sample(Vec2::new(1.25, -0.25)),
        texture.sample(Vec2::new(0.25, 0.75))
    );
}

#[test]
fn test_both_fetch_paths_wrap() {
    let texture = gradient_texture();
    for sampler in both_variants() {
        let wrapped = sampler.fetch(&texture, Vec2::new(1.3, -0.2));
        let direct = sampler.fetch(&texture, Vec2::new(0.3, 0.8));
        common::assert_color_near(wrapped, direct, 1e-4);
    }
}

// === Zero rotation ===

#[test]
fn test_zero_rotation_leaves_coordinates_untouched() {
    let params = TileBlendParams {
        rotation: 0.0,
        ..TileBlendParams::default()
    };
    for sampler in both_variants() {
        for uv0 in sample_points() {
            let square = to_square_uv(uv0, Resolution::new(300, 200), 1.7);
            let lookup = sampler.lookup(square, &params);
            assert_eq!(lookup.corner.coord, lookup.uv);
            assert_eq!(lookup.center.coord, lookup.uv);
        }
    }
}

// === Scenarios ===

#[test]
fn test_center_pixel_with_zero_falloff_is_center_sample() {
    let texture = gradient_texture();
    let params = TileBlendParams {
        rotation: 0.0,
        blend_falloff: 0.0,
        blend_offset: 1.0,
        scale: 1.0,
        wave: Wave::default(),
    };
    let resolution = Resolution::new(100, 100);
    let sampler = TileBlendSampler::new(Variant::Rigid.config());

    let square = to_square_uv(Vec2::new(0.5, 0.5), resolution, params.scale);
    assert_eq!(square, Vec2::ZERO);

    let lookup = sampler.lookup(square, &params);
    assert_eq!(lookup.weight, 0.0);
    assert_eq!(lookup.center.point, Vec2::HALF);

    let color = sampler.evaluate(Vec2::new(0.5, 0.5), &params, resolution, &texture);
    assert_eq!(color, sampler.fetch(&texture, lookup.center.coord));
    assert_eq!(color, texture.sample(Vec2::ZERO));
}

#[test]
fn test_warped_variant_with_zero_amplitude_matches_unwarped() {
    let texture = gradient_texture();
    let warped = TileBlendSampler::new(Variant::Warped.config());
    let unwarped = TileBlendSampler::new(SamplerConfig {
        warp: false,
        ..Variant::Warped.config()
    });
    let resolution = Resolution::new(320, 240);

    for period in [0.0, 0.1, 2.0, 7.3, 1e6] {
        let params = TileBlendParams {
            wave: Wave { amplitude: 0.0, period },
            ..TileBlendParams::default()
        };
        for y in (0..240).step_by(23) {
            for x in (0..320).step_by(29) {
                let uv0 = pixel_uv(x, y, 320, 240);
                let a = warped.evaluate(uv0, &params, resolution, &texture);
                let b = unwarped.evaluate(uv0, &params, resolution, &texture);
                assert_eq!(a, b, "period {} at ({}, {})", period, x, y);
            }
        }
    }
}

// === Graceful degradation ===

#[test]
fn test_extreme_parameters_give_finite_colors() {
    let texture = gradient_texture();
    let extremes = [0.0, -0.0, 1e-30, -7.5, 1e30, f32::MAX, -f32::MAX];
    let resolutions = [Resolution::new(1, 1), Resolution::new(0, 0), Resolution::new(u32::MAX, 3)];
    let points = [
        Vec2::new(0.5, 0.5),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1e20, 3e25),
        Vec2::new(f32::MAX, -f32::MAX),
    ];

    for sampler in both_variants() {
        for &value in &extremes {
            let params_set = [
                TileBlendParams { rotation: value, ..TileBlendParams::default() },
                TileBlendParams { blend_falloff: value, ..TileBlendParams::default() },
                TileBlendParams { blend_offset: value, ..TileBlendParams::default() },
                TileBlendParams { scale: value, ..TileBlendParams::default() },
                TileBlendParams {
                    wave: Wave { amplitude: value, period: value },
                    ..TileBlendParams::default()
                },
                TileBlendParams {
                    rotation: value,
                    blend_falloff: value,
                    blend_offset: value,
                    scale: value,
                    wave: Wave { amplitude: value, period: value },
                },
            ];
            for params in &params_set {
                for &resolution in &resolutions {
                    for &uv0 in &points {
                        let color = sampler.evaluate(uv0, params, resolution, &texture);
                        assert!(
                            color.is_finite(),
                            "{:?} at {:?} {:?} gave {:?}",
                            params,
                            uv0,
                            resolution,
                            color
                        );
                        for channel in [color.r, color.g, color.b, color.a] {
                            assert!((-1e-6..=1.0 + 1e-6).contains(&channel));
                        }
                    }
                }
            }
        }
    }
}
