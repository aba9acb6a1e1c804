//! Shader module - WGSL shaders for GPU rendering
//!
//! Shaders are stored as external .wgsl files and included at compile time.

/// Built-in shaders included at compile time
pub mod builtin {
    /// Tile-blend shader - full-screen quad, dual-lattice rotated texture tiling
    pub const TILE_BLEND: &str = include_str!("tile_blend.wgsl");
}
