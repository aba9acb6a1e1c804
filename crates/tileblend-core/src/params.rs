//! Per-frame parameter set and sampler configuration

use crate::hash::HashKind;
use crate::math::Vec2;

/// Sinusoidal UV warp settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    /// Displacement in lattice units
    pub amplitude: f32,
    /// Wavelength in lattice units
    pub period: f32,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            period: 2.0,
        }
    }
}

/// Values supplied fresh for every draw
///
/// Ranges are not enforced: out-of-range values give degenerate but
/// well-defined output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBlendParams {
    /// Fraction of a full turn applied per cell (0..1)
    pub rotation: f32,
    /// Sharpness of the transition between the two lattices (0..~50)
    pub blend_falloff: f32,
    /// Bias applied to the center-lattice distance (0..~5)
    pub blend_offset: f32,
    /// Tiling scale; four cells span the shorter screen axis at 1.0
    pub scale: f32,
    /// Only read when the warp is enabled
    pub wave: Wave,
}

impl Default for TileBlendParams {
    fn default() -> Self {
        Self {
            rotation: 0.25,
            blend_falloff: 10.0,
            blend_offset: 1.0,
            scale: 1.0,
            wave: Wave::default(),
        }
    }
}

/// Render target size in device pixels, never zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    width: f32,
    height: f32,
}

impl Resolution {
    /// Zero dimensions are bumped to one pixel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// From float dimensions; anything below one pixel (or NaN) becomes one
    pub fn from_f32(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Length of the shorter side, always >= 1
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// The two shipped configurations of the sampler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Rigid lattice, vector hash, coordinates wrapped before sampling
    #[default]
    Rigid,
    /// Sinusoidal warp before the lattice lookup, scalar hash
    Warped,
}

impl Variant {
    pub fn config(self) -> SamplerConfig {
        match self {
            Variant::Rigid => SamplerConfig {
                hash: HashKind::Vector,
                warp: false,
                explicit_wrap: true,
            },
            Variant::Warped => SamplerConfig {
                hash: HashKind::Scalar,
                warp: true,
                explicit_wrap: false,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Variant::Rigid => Variant::Warped,
            Variant::Warped => Variant::Rigid,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Rigid => "rigid",
            Variant::Warped => "warped",
        }
    }
}

/// Knobs that distinguish the variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub hash: HashKind,
    /// Apply the sinusoidal warp before the lattice lookup
    pub warp: bool,
    /// Take sample coordinates modulo 1 before the texture lookup instead of
    /// relying on repeat addressing
    pub explicit_wrap: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}
