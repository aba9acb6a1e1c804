//! Read-only sample sources
//!
//! Addressing is repeat-wrap on both axes: coordinates outside [0, 1] are
//! taken modulo 1. `ImageTexture` filters bilinearly with texel centers at
//! `(i + 0.5) / n`, matching GPU linear filtering.

use image::RgbaImage;
use thiserror::Error;

use crate::color::Rgba;
use crate::math::{Vec2, fract};

/// Texture construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("texture has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },
    #[error("expected {expected} bytes of RGBA data, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Something the sampler can read colors from
pub trait Texture {
    /// Filtered color at `uv`, repeat-wrapped on both axes
    fn sample(&self, uv: Vec2) -> Rgba;
}

impl<T: Texture + ?Sized> Texture for &T {
    fn sample(&self, uv: Vec2) -> Rgba {
        (**self).sample(uv)
    }
}

/// Single color everywhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidTexture(pub Rgba);

impl SolidTexture {
    /// Opaque blue stand-in used before an image is loaded
    pub fn placeholder() -> Self {
        Self(Rgba::BLUE)
    }
}

impl Texture for SolidTexture {
    fn sample(&self, _uv: Vec2) -> Rgba {
        self.0
    }
}

/// Repeat-wrap a coordinate into [0, 1]; non-finite input maps to 0
#[inline]
fn wrap_unit(x: f32) -> f32 {
    if x.is_finite() { fract(x) } else { 0.0 }
}

/// Bilinear-filtered RGBA image
#[derive(Debug, Clone)]
pub struct ImageTexture {
    width: u32,
    height: u32,
    texels: Vec<Rgba>,
}

impl ImageTexture {
    /// Build from tightly packed RGBA8 rows, first row at v = 0
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroSize { width, height });
        }

        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let texels = data
            .chunks_exact(4)
            .map(|px| Rgba::from_u8(px[0], px[1], px[2], px[3]))
            .collect();

        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn from_image(image: &RgbaImage) -> Result<Self, TextureError> {
        let (width, height) = image.dimensions();
        Self::from_rgba8(width, height, image.as_raw())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn texel(&self, x: i64, y: i64) -> Rgba {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.texels[y * self.width as usize + x]
    }
}

impl Texture for ImageTexture {
    fn sample(&self, uv: Vec2) -> Rgba {
        let u = wrap_unit(uv.x) * self.width as f32 - 0.5;
        let v = wrap_unit(uv.y) * self.height as f32 - 0.5;

        let x0 = u.floor();
        let y0 = v.floor();
        let fx = u - x0;
        let fy = v - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = self.texel(x0, y0).mix(self.texel(x0 + 1, y0), fx);
        let bottom = self.texel(x0, y0 + 1).mix(self.texel(x0 + 1, y0 + 1), fx);
        top.mix(bottom, fy)
    }
}
