//! Tile-Blend core - the per-pixel tiling sampler
//!
//! This crate provides:
//! - The dual-lattice tile-blend sampler as a pure CPU function
//! - Lattice hashes used to seed per-cell rotation
//! - Repeat-wrapped, bilinear texture sampling
//! - Full-frame software rasterization into an RGBA image
//!
//! The WGSL shader in `tileblend-renderer` mirrors this implementation step
//! for step, so anything rendered on the GPU can be reproduced here.

pub mod color;
pub mod hash;
pub mod math;
pub mod params;
pub mod raster;
pub mod sampler;
pub mod texture;

pub use color::Rgba;
pub use hash::{HashKind, LatticeHash, ScalarHash, VectorHash};
pub use math::{FULL_ROTATION, Vec2};
pub use params::{Resolution, SamplerConfig, TileBlendParams, Variant, Wave};
pub use raster::render_frame;
pub use sampler::{LatticeSample, Lookup, TileBlendSampler, blend_weight};
pub use texture::{ImageTexture, SolidTexture, Texture, TextureError};
