//! Source image loading and GPU upload
//!
//! The tiled effect reads one small image. It is decoded to RGBA8 once,
//! then uploaded to a repeat-addressed, linearly filtered texture (GPU) or
//! wrapped as an [`ImageTexture`] (CPU).

use std::io::BufReader;
use std::path::Path;

use image::AnimationDecoder;
use tileblend_core::{ImageTexture, Rgba};
use wgpu::util::DeviceExt;

use crate::RenderError;

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SourceImage {
    /// Load an image from file path
    ///
    /// GIFs contribute their first frame only; the effect is static.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());

        let image = if extension.as_deref() == Some("gif") {
            Self::load_gif(path)?
        } else {
            let img = image::open(path).map_err(|e| RenderError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;
            Self::from_rgba(img.to_rgba8())
        };

        log::info!("Loaded source image {:?} ({}x{})", path, image.width, image.height);
        Ok(image)
    }

    /// Decode an in-memory encoded image (PNG, JPEG, GIF)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        let img = image::load_from_memory(bytes).map_err(RenderError::DecodeBytes)?;
        Ok(Self::from_rgba(img.to_rgba8()))
    }

    fn load_gif(path: &Path) -> Result<Self, RenderError> {
        let file = std::fs::File::open(path).map_err(|e| RenderError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let decoder = image::codecs::gif::GifDecoder::new(reader).map_err(|e| RenderError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

        let first = decoder
            .into_frames()
            .next()
            .ok_or_else(|| RenderError::EmptyImage(path.to_path_buf()))?
            .map_err(|e| RenderError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::from_rgba(first.into_buffer()))
    }

    fn from_rgba(rgba: image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
        }
    }

    /// 1x1 opaque blue, shown until a real image has loaded
    pub fn placeholder() -> Self {
        Self {
            data: Rgba::BLUE.to_u8().to_vec(),
            width: 1,
            height: 1,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// CPU-side texture with the same addressing as the GPU one
    pub fn to_texture(&self) -> Result<ImageTexture, RenderError> {
        Ok(ImageTexture::from_rgba8(self.width, self.height, &self.data)?)
    }
}

/// GPU texture for the source image
pub struct SourceTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl SourceTexture {
    /// Upload decoded image data
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, image: &SourceImage) -> Self {
        let (width, height) = image.dimensions();

        // Unorm, not sRGB: filtering happens on the stored byte values
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("Tile Blend Source Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &image.data,
        );

        let view = texture.create_view(&Default::default());
        let sampler = Self::create_repeat_sampler(device);

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    /// Replace the contents in place when the size is unchanged
    ///
    /// Returns false if the image has a different size; the caller must
    /// create a new texture (and bind group) instead.
    pub fn update(&self, queue: &wgpu::Queue, image: &SourceImage) -> bool {
        if image.dimensions() != (self.width, self.height) {
            return false;
        }

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.width * 4),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        true
    }

    /// Repeat on both axes, bilinear filtering
    pub fn create_repeat_sampler(device: &wgpu::Device) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Tile Blend Source Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        })
    }
}
