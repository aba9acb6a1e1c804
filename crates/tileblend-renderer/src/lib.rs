//! Tile-Blend renderer - GPU rendering of the tiled texture effect
//!
//! This crate provides:
//! - The WGSL port of the tile-blend sampler and its uniform block
//! - Source image decoding and upload (repeat-wrapped, linearly filtered)
//! - A render pipeline drawing one full-screen quad per frame
//! - The `QuadSurface` abstraction with GPU, CPU and mock implementations

pub mod mock;
pub mod pipeline;
pub mod shaders;
pub mod source_image;
pub mod surface;
pub mod uniforms;

pub use mock::MockSurface;
pub use pipeline::TileBlendPipeline;
pub use source_image::{SourceImage, SourceTexture};
pub use surface::{CpuSurface, GpuSurface, QuadSurface};
pub use uniforms::TileBlendUniforms;

use std::path::PathBuf;

use thiserror::Error;
use tileblend_core::TextureError;

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to decode image data: {0}")]
    DecodeBytes(#[source] image::ImageError),
    #[error("image {0:?} has no frames")]
    EmptyImage(PathBuf),
    #[error("failed to write frame to {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error(transparent)]
    Texture(#[from] TextureError),
}
