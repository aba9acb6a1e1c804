//! GPU state management
//!
//! Device, window surface and the tile-blend pipeline for the viewer window.

use std::sync::Arc;

use anyhow::{Context, Result};
use tileblend::Viewer;
use tileblend_renderer::{GpuSurface, TileBlendPipeline};
use winit::window::Window;

pub struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: TileBlendPipeline,
}

impl GpuState {
    /// Initialize GPU resources for `window`
    pub fn new(window: Arc<Window>) -> Result<Self> {
        log::debug!("Initializing GPU state");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let size = window.inner_size();

        let surface = instance
            .create_surface(window)
            .context("Failed to create window surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to find suitable GPU adapter")?;

        log::debug!(
            "GPU adapter: {:?} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
            .context("Failed to create device")?;

        let caps = surface.get_capabilities(&adapter);
        // Colors are written as stored, so skip the sRGB encode on output
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .context("Surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = TileBlendPipeline::new(&device, &queue, format);
        log::info!("Surface configured: {}x{} {:?}", config.width, config.height, format);

        Ok(Self {
            device,
            queue,
            surface,
            config,
            pipeline,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload a pending source image and draw one frame
    pub fn render(&mut self, viewer: &mut Viewer) -> Result<()> {
        if let Some(image) = viewer.take_source() {
            self.pipeline.set_source(&self.device, &self.queue, image);
            log::debug!("Source texture uploaded: {:?}", self.pipeline.source_dimensions());
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                viewer.request_redraw();
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to acquire surface texture"),
        };

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut target = GpuSurface::new(
            &self.device,
            &self.queue,
            &self.pipeline,
            &view,
            (self.config.width, self.config.height),
        );
        viewer.draw(&mut target);
        frame.present();
        Ok(())
    }
}
