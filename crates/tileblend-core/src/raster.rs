//! Software rasterization of a full frame
//!
//! Evaluates the sampler once per pixel center, the same way the GPU does
//! for the full-screen quad. Row 0 of the output image is the top of the
//! screen while `v` grows upward, as with the GL texture coordinates.

use std::time::Instant;

use image::{Rgba as ImageRgba, RgbaImage};

use crate::hash::LatticeHash;
use crate::math::Vec2;
use crate::params::{Resolution, TileBlendParams};
use crate::sampler::TileBlendSampler;
use crate::texture::Texture;

/// Normalized coordinate of the center of pixel (`x`, `y`)
pub fn pixel_uv(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32,
        1.0 - (y as f32 + 0.5) / height as f32,
    )
}

/// Render a `width` x `height` frame
pub fn render_frame<H, T>(
    sampler: &TileBlendSampler<H>,
    params: &TileBlendParams,
    texture: &T,
    width: u32,
    height: u32,
) -> RgbaImage
where
    H: LatticeHash,
    T: Texture + ?Sized,
{
    let start = Instant::now();
    let resolution = Resolution::new(width, height);

    let frame = RgbaImage::from_fn(width, height, |x, y| {
        let uv0 = pixel_uv(x, y, width, height);
        ImageRgba(sampler.evaluate(uv0, params, resolution, texture).to_u8())
    });

    log::debug!(
        "Rendered {}x{} frame on CPU in {:.2}ms",
        width,
        height,
        start.elapsed().as_secs_f64() * 1000.0
    );
    frame
}
