//! Mock surface for testing
//!
//! Records every draw so adapters can be tested without a GPU context.

use tileblend_core::Resolution;

use crate::surface::QuadSurface;
use crate::uniforms::TileBlendUniforms;

/// A surface that records draw calls instead of rendering
#[derive(Debug)]
pub struct MockSurface {
    resolution: Resolution,
    /// Uniforms of every draw, oldest first
    pub draws: Vec<TileBlendUniforms>,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            draws: Vec::new(),
        }
    }

    /// Simulate a resize of the host surface
    pub fn resize(&mut self, width: u32, height: u32) {
        self.resolution = Resolution::new(width, height);
    }

    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    pub fn last_draw(&self) -> Option<&TileBlendUniforms> {
        self.draws.last()
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl QuadSurface for MockSurface {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn draw_quad(&mut self, uniforms: &TileBlendUniforms) {
        self.draws.push(*uniforms);
    }
}
