//! Rendering surfaces that accept one full-screen quad draw per frame
//!
//! The sampler is re-evaluated over every pixel on each draw; surfaces keep
//! no history between draws. [`GpuSurface`] runs the WGSL shader,
//! [`CpuSurface`] runs the reference implementation from `tileblend-core`,
//! and [`crate::mock::MockSurface`] only records calls.

use std::path::Path;
use std::time::Instant;

use image::RgbaImage;
use tileblend_core::{ImageTexture, Resolution, TileBlendSampler, render_frame};

use crate::RenderError;
use crate::pipeline::TileBlendPipeline;
use crate::uniforms::TileBlendUniforms;

/// Something that can draw the tile-blend quad
pub trait QuadSurface {
    /// Size of the draw target in device pixels
    fn resolution(&self) -> Resolution;

    /// Evaluate the sampler over the whole target with these uniforms
    fn draw_quad(&mut self, uniforms: &TileBlendUniforms);
}

/// One frame's worth of GPU target
pub struct GpuSurface<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    pipeline: &'a TileBlendPipeline,
    target: &'a wgpu::TextureView,
    size: (u32, u32),
}

impl<'a> GpuSurface<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        pipeline: &'a TileBlendPipeline,
        target: &'a wgpu::TextureView,
        size: (u32, u32),
    ) -> Self {
        Self {
            device,
            queue,
            pipeline,
            target,
            size,
        }
    }
}

impl QuadSurface for GpuSurface<'_> {
    fn resolution(&self) -> Resolution {
        Resolution::new(self.size.0, self.size.1)
    }

    fn draw_quad(&mut self, uniforms: &TileBlendUniforms) {
        self.pipeline.update_uniforms(self.queue, uniforms);

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Tile Blend Encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Tile Blend Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.pipeline.render(&mut pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// Software surface backed by an RGBA image
pub struct CpuSurface {
    texture: ImageTexture,
    frame: RgbaImage,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32, texture: ImageTexture) -> Self {
        Self {
            texture,
            frame: RgbaImage::new(width, height),
        }
    }

    /// Last drawn frame (black before the first draw)
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Write the last drawn frame, format picked from the extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.frame.save(path).map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Wrote {}x{} frame to {:?}", self.frame.width(), self.frame.height(), path);
        Ok(())
    }
}

impl QuadSurface for CpuSurface {
    fn resolution(&self) -> Resolution {
        Resolution::new(self.frame.width(), self.frame.height())
    }

    fn draw_quad(&mut self, uniforms: &TileBlendUniforms) {
        let start = Instant::now();
        let sampler = TileBlendSampler::new(uniforms.config());
        let (width, height) = self.frame.dimensions();
        self.frame = render_frame(&sampler, &uniforms.params(), &self.texture, width, height);
        log::trace!("CPU quad draw took {:?}", start.elapsed());
    }
}
