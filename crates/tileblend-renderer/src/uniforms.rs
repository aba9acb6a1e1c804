//! Uniform block shared by the WGSL shader and the CPU surface
//!
//! Layout must match `Params` in `tile_blend.wgsl`: a vec2 followed by six
//! f32 and four u32, 48 bytes in total (a multiple of 16).

use bytemuck::{Pod, Zeroable};
use tileblend_core::{HashKind, Resolution, SamplerConfig, TileBlendParams, Wave};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TileBlendUniforms {
    pub resolution: [f32; 2],
    pub rotation: f32,
    pub blend_falloff: f32,
    pub blend_offset: f32,
    pub scale: f32,
    pub wave_amplitude: f32,
    pub wave_period: f32,
    pub hash_kind: u32,
    pub warp_enabled: u32,
    pub explicit_wrap: u32,
    pub _pad: u32,
}

impl TileBlendUniforms {
    pub fn new(params: &TileBlendParams, config: SamplerConfig, resolution: Resolution) -> Self {
        Self {
            resolution: resolution.as_vec2().into(),
            rotation: params.rotation,
            blend_falloff: params.blend_falloff,
            blend_offset: params.blend_offset,
            scale: params.scale,
            wave_amplitude: params.wave.amplitude,
            wave_period: params.wave.period,
            hash_kind: config.hash.as_u32(),
            warp_enabled: config.warp as u32,
            explicit_wrap: config.explicit_wrap as u32,
            _pad: 0,
        }
    }

    pub fn params(&self) -> TileBlendParams {
        TileBlendParams {
            rotation: self.rotation,
            blend_falloff: self.blend_falloff,
            blend_offset: self.blend_offset,
            scale: self.scale,
            wave: Wave {
                amplitude: self.wave_amplitude,
                period: self.wave_period,
            },
        }
    }

    pub fn config(&self) -> SamplerConfig {
        SamplerConfig {
            hash: HashKind::from_u32(self.hash_kind),
            warp: self.warp_enabled != 0,
            explicit_wrap: self.explicit_wrap != 0,
        }
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::from_f32(self.resolution[0], self.resolution[1])
    }
}
