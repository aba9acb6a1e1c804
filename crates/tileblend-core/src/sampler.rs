//! Tile-blend sampler
//!
//! Maps a normalized screen coordinate into two interleaved lattices (one at
//! integer points, one offset by half a cell), rotates the coordinate about
//! the nearest point of each lattice by a per-cell pseudo-random angle, and
//! blends the two texture samples by relative squared distance. The result is
//! a non-repeating tiled look from a single small image.
//!
//! Every function here is pure. Identical inputs give bit-identical output,
//! and every finite input yields a finite color.

use crate::color::Rgba;
use crate::hash::{HashKind, LatticeHash};
use crate::math::{FULL_ROTATION, Vec2};
use crate::params::{Resolution, SamplerConfig, TileBlendParams, Wave};
use crate::texture::Texture;

/// Nearest point of one lattice and the rotated sample coordinate around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSample {
    /// Nearest lattice point
    pub point: Vec2,
    /// Coordinate rotated about `point`, before any wrapping
    pub coord: Vec2,
    /// Squared distance from the input coordinate to `point`
    pub distance_sq: f32,
}

/// Intermediate values for one pixel, up to but excluding the texture reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup {
    /// Coordinate after the optional warp
    pub uv: Vec2,
    pub corner: LatticeSample,
    pub center: LatticeSample,
    /// 1 selects the corner sample, 0 the center sample
    pub weight: f32,
}

/// Map a normalized surface coordinate to square, aspect-independent lattice
/// space centered on the screen
pub fn to_square_uv(uv0: Vec2, resolution: Resolution, scale: f32) -> Vec2 {
    let res = resolution.as_vec2();
    let pixel = uv0 * res;
    let centered = pixel - res * 0.5;
    let square = centered / resolution.min_side();
    square * (scale * 4.0)
}

/// Sinusoidal displacement, identity for zero amplitude or zero period
pub fn warp(uv: Vec2, wave: Wave) -> Vec2 {
    if wave.amplitude == 0.0 || wave.period == 0.0 {
        return uv;
    }

    let offset = Vec2::new(
        (FULL_ROTATION * uv.y / wave.period).sin(),
        (FULL_ROTATION * uv.x / wave.period).sin(),
    );
    uv + offset * wave.amplitude
}

/// Rotate `uv` about `center`; a zero angle returns `uv` unchanged
pub fn rotate_about(uv: Vec2, angle: f32, center: Vec2) -> Vec2 {
    if angle == 0.0 {
        return uv;
    }

    let delta = uv - center;
    let (s, c) = angle.sin_cos();
    Vec2::new(delta.x * c - delta.y * s, delta.x * s + delta.y * c) + center
}

/// Interpolation factor between the center (0) and corner (1) samples
///
/// `d_center` is expected to already carry the blend offset. NaN from
/// extreme inputs (`0 * inf`, `inf - inf`) collapses to 0.
pub fn blend_weight(d_corner: f32, d_center: f32, falloff: f32) -> f32 {
    let w = ((d_center - d_corner) * falloff).clamp(0.0, 1.0);
    if w.is_nan() { 0.0 } else { w }
}

/// Configurable tile-blend sampler
///
/// The hash is a type parameter so any [`LatticeHash`] can be substituted;
/// the default [`HashKind`] switches between the shipped hashes at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBlendSampler<H = HashKind> {
    hash: H,
    warp: bool,
    explicit_wrap: bool,
}

impl TileBlendSampler<HashKind> {
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            hash: config.hash,
            warp: config.warp,
            explicit_wrap: config.explicit_wrap,
        }
    }

    pub fn config(&self) -> SamplerConfig {
        SamplerConfig {
            hash: self.hash,
            warp: self.warp,
            explicit_wrap: self.explicit_wrap,
        }
    }
}

impl Default for TileBlendSampler<HashKind> {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

impl<H: LatticeHash> TileBlendSampler<H> {
    /// Sampler with a custom hash
    pub fn with_hash(hash: H, warp: bool, explicit_wrap: bool) -> Self {
        Self {
            hash,
            warp,
            explicit_wrap,
        }
    }

    /// Nearest point of the lattice shifted by `lattice_offset`, and `uv`
    /// rotated about it
    ///
    /// The hash always sees the unshifted integer coordinate, so both
    /// lattices draw from the same hash domain.
    pub fn sample_lattice(&self, uv: Vec2, lattice_offset: Vec2, rotation: f32) -> LatticeSample {
        let point = (uv - lattice_offset).round_half_up() + lattice_offset;
        // +1 keeps a zero hash from pinning a cell at zero rotation
        let seed = self.hash.hash(point - lattice_offset) + 1.0;
        let angle = rotation * FULL_ROTATION * seed;

        LatticeSample {
            point,
            coord: rotate_about(uv, angle, point),
            distance_sq: (uv - point).length_squared(),
        }
    }

    /// Everything short of the texture reads, starting from square lattice
    /// space (see [`to_square_uv`])
    pub fn lookup(&self, square_uv: Vec2, params: &TileBlendParams) -> Lookup {
        let uv = if self.warp {
            warp(square_uv, params.wave)
        } else {
            square_uv
        };

        let corner = self.sample_lattice(uv, Vec2::ZERO, params.rotation);
        let center = self.sample_lattice(uv, Vec2::HALF, params.rotation);
        let weight = blend_weight(
            corner.distance_sq,
            center.distance_sq * params.blend_offset,
            params.blend_falloff,
        );

        Lookup {
            uv,
            corner,
            center,
            weight,
        }
    }

    /// Read the texture at a lattice sample coordinate
    pub fn fetch<T: Texture + ?Sized>(&self, texture: &T, coord: Vec2) -> Rgba {
        if self.explicit_wrap {
            texture.sample(coord.fract())
        } else {
            texture.sample(coord)
        }
    }

    /// Color for one normalized surface coordinate
    pub fn evaluate<T: Texture + ?Sized>(
        &self,
        uv0: Vec2,
        params: &TileBlendParams,
        resolution: Resolution,
        texture: &T,
    ) -> Rgba {
        let square = to_square_uv(uv0, resolution, params.scale);
        let lookup = self.lookup(square, params);

        let corner = self.fetch(texture, lookup.corner.coord);
        let center = self.fetch(texture, lookup.center.coord);
        center.mix(corner, lookup.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::VectorHash;
    use crate::params::Variant;
    use crate::texture::SolidTexture;

    fn params() -> TileBlendParams {
        TileBlendParams {
            rotation: 0.3,
            blend_falloff: 12.0,
            blend_offset: 1.0,
            scale: 1.0,
            wave: Wave {
                amplitude: 0.2,
                period: 1.5,
            },
        }
    }

    #[test]
    fn test_square_uv_centers_and_corrects_aspect() {
        let res = Resolution::new(200, 100);
        assert_eq!(to_square_uv(Vec2::HALF, res, 1.0), Vec2::ZERO);
        // Right edge of a 2:1 viewport is one short side from the center
        assert_eq!(to_square_uv(Vec2::new(1.0, 0.5), res, 1.0), Vec2::new(4.0, 0.0));
        assert_eq!(to_square_uv(Vec2::new(0.5, 1.0), res, 0.5), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_lattice_points() {
        let sampler = TileBlendSampler::default();
        let uv = Vec2::new(1.3, -0.6);
        let corner = sampler.sample_lattice(uv, Vec2::ZERO, 0.0);
        let center = sampler.sample_lattice(uv, Vec2::HALF, 0.0);
        assert_eq!(corner.point, Vec2::new(1.0, -1.0));
        assert_eq!(center.point, Vec2::new(1.5, -0.5));
        assert!((corner.distance_sq - (0.09 + 0.16)).abs() < 1e-5);
        assert!((center.distance_sq - (0.04 + 0.01)).abs() < 1e-5);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let sampler = TileBlendSampler::default();
        let p = TileBlendParams { rotation: 0.0, ..params() };
        for uv in [Vec2::new(0.1, 0.7), Vec2::new(-3.3, 2.45), Vec2::new(17.9, -0.01)] {
            let lookup = sampler.lookup(uv, &p);
            assert_eq!(lookup.corner.coord, lookup.uv);
            assert_eq!(lookup.center.coord, lookup.uv);
        }
    }

    #[test]
    fn test_rotation_preserves_distance_to_anchor() {
        let sampler = TileBlendSampler::default();
        let uv = Vec2::new(0.2, 0.4);
        let s = sampler.sample_lattice(uv, Vec2::ZERO, 0.7);
        let rotated_dist = (s.coord - s.point).length_squared();
        assert!((rotated_dist - s.distance_sq).abs() < 1e-5);
        assert_ne!(s.coord, uv);
    }

    #[test]
    fn test_full_turn_rotation_matches_hash_offset() {
        // rotation = 1 turns by 2π(hash + 1), i.e. by 2π·hash modulo a full turn
        let sampler = TileBlendSampler::default();
        let uv = Vec2::new(3.3, -1.9);
        let cell = Vec2::new(3.0, -2.0);
        let s = sampler.sample_lattice(uv, Vec2::ZERO, 1.0);
        assert_eq!(s.point, cell);
        let expected = rotate_about(uv, FULL_ROTATION * VectorHash.hash(cell), cell);
        assert!((s.coord - expected).length_squared() < 1e-8);
    }

    #[test]
    fn test_blend_weight_clamps() {
        assert_eq!(blend_weight(0.1, 0.2, 0.0), 0.0);
        assert_eq!(blend_weight(0.1, 0.2, 1000.0), 1.0);
        assert_eq!(blend_weight(0.2, 0.1, 1000.0), 0.0);
        assert!((blend_weight(0.1, 0.2, 5.0) - 0.5).abs() < 1e-6);
        assert_eq!(blend_weight(0.1, f32::INFINITY, 0.0), 0.0);
        assert_eq!(blend_weight(f32::INFINITY, f32::INFINITY, 1.0), 0.0);
    }

    #[test]
    fn test_warp_identity_cases() {
        let uv = Vec2::new(0.37, -1.2);
        assert_eq!(warp(uv, Wave { amplitude: 0.0, period: 3.0 }), uv);
        assert_eq!(warp(uv, Wave { amplitude: 0.5, period: 0.0 }), uv);
        assert_ne!(warp(uv, Wave { amplitude: 0.5, period: 3.0 }), uv);
    }

    #[test]
    fn test_warp_displacement_bounded_by_amplitude() {
        let wave = Wave { amplitude: 0.25, period: 0.7 };
        for i in 0..50 {
            let uv = Vec2::new(i as f32 * 0.137 - 3.0, i as f32 * -0.071 + 1.0);
            let d = warp(uv, wave) - uv;
            assert!(d.x.abs() <= 0.25 + 1e-6 && d.y.abs() <= 0.25 + 1e-6);
        }
    }

    #[test]
    fn test_rigid_sampler_ignores_wave() {
        let sampler = TileBlendSampler::new(Variant::Rigid.config());
        let a = sampler.lookup(Vec2::new(0.4, 0.9), &params());
        let b = sampler.lookup(
            Vec2::new(0.4, 0.9),
            &TileBlendParams { wave: Wave { amplitude: 0.9, period: 0.3 }, ..params() },
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_solid_texture_passes_through() {
        let tex = SolidTexture(Rgba::rgb(0.25, 0.5, 0.75));
        for variant in [Variant::Rigid, Variant::Warped] {
            let sampler = TileBlendSampler::new(variant.config());
            let c = sampler.evaluate(Vec2::new(0.13, 0.87), &params(), Resolution::new(640, 480), &tex);
            assert!((c.r - 0.25).abs() < 1e-6);
            assert!((c.g - 0.5).abs() < 1e-6);
            assert!((c.b - 0.75).abs() < 1e-6);
        }
    }

    #[test]
    fn test_custom_hash_is_substitutable() {
        struct Zero;
        impl LatticeHash for Zero {
            fn hash(&self, _cell: Vec2) -> f32 {
                0.0
            }
        }

        // With a zero hash, rotation = 1 spins every cell by exactly one turn
        let sampler = TileBlendSampler::with_hash(Zero, false, true);
        let p = TileBlendParams { rotation: 1.0, ..params() };
        let lookup = sampler.lookup(Vec2::new(0.2, 0.3), &p);
        assert!((lookup.corner.coord - lookup.uv).length_squared() < 1e-10);
        assert!((lookup.center.coord - lookup.uv).length_squared() < 1e-10);
    }
}
