//! Windowing-independent viewer state
//!
//! Owns the sliders, the gallery cursor and the current source image, and
//! decides when a frame is needed. The winit shell in `main.rs` feeds it
//! commands and hands it a surface when a redraw is due.

use std::path::{Path, PathBuf};

use tileblend_config::Config;
use tileblend_renderer::{QuadSurface, SourceImage};

use crate::commands::Command;
use crate::controls::ParamControls;
use crate::gallery::Gallery;

/// What the shell has to do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Nothing,
    /// Only the window title changed
    Retitle,
    /// A new frame is needed
    Redraw,
    Quit,
}

pub struct Viewer {
    controls: ParamControls,
    gallery: Gallery,
    title_prefix: String,
    source: SourceImage,
    source_path: Option<PathBuf>,
    /// Set when `source` has not been uploaded yet
    source_dirty: bool,
    needs_redraw: bool,
}

impl Viewer {
    /// Build from configuration; `base_dir` resolves relative paths
    ///
    /// Missing images and galleries are logged and replaced by the
    /// placeholder texture and an empty gallery.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        let mut gallery = match config.gallery_dir(base_dir) {
            Some(dir) => Gallery::scan(&dir).unwrap_or_else(|e| {
                log::warn!("Could not read gallery {:?}: {}", dir, e);
                Gallery::default()
            }),
            None => Gallery::default(),
        };

        let mut viewer = Self {
            controls: ParamControls::from_config(config),
            gallery: Gallery::default(),
            title_prefix: config.window.title.clone(),
            source: SourceImage::placeholder(),
            source_path: None,
            source_dirty: true,
            needs_redraw: true,
        };

        let startup = config
            .texture_path(base_dir)
            .or_else(|| gallery.next_image().map(Path::to_path_buf));
        if let Some(path) = startup {
            gallery.select_path(&path);
            viewer.load_source(&path);
        }
        viewer.gallery = gallery;
        viewer
    }

    pub fn controls(&self) -> &ParamControls {
        &self.controls
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn title(&self) -> String {
        self.controls.title(&self.title_prefix)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Resize, expose and similar host events
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Load an image, keeping the previous one if decoding fails
    pub fn load_source(&mut self, path: &Path) -> bool {
        match SourceImage::from_path(path) {
            Ok(image) => {
                self.source = image;
                self.source_path = Some(path.to_path_buf());
                self.source_dirty = true;
                self.needs_redraw = true;
                true
            }
            Err(e) => {
                log::warn!("Failed to load source image: {}", e);
                false
            }
        }
    }

    /// Source image not yet handed to the surface, if any
    pub fn take_source(&mut self) -> Option<&SourceImage> {
        if !self.source_dirty {
            return None;
        }
        self.source_dirty = false;
        Some(&self.source)
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn handle(&mut self, command: Command) -> Response {
        let changed = match command {
            Command::Quit => return Response::Quit,
            Command::NextImage => self.cycle(Gallery::next_image),
            Command::PreviousImage => self.cycle(Gallery::previous_image),
            Command::SelectNext | Command::SelectPrevious => {
                self.controls.apply(command);
                return Response::Retitle;
            }
            other => self.controls.apply(other),
        };
        if changed {
            self.needs_redraw = true;
            Response::Redraw
        } else {
            Response::Nothing
        }
    }

    fn cycle(&mut self, step: fn(&mut Gallery) -> Option<&Path>) -> bool {
        let Some(path) = step(&mut self.gallery).map(Path::to_path_buf) else {
            log::debug!("Gallery is empty");
            return false;
        };
        self.load_source(&path)
    }

    /// Apply a hot-reloaded configuration
    pub fn reload(&mut self, config: &Config, base_dir: &Path) -> Response {
        self.title_prefix = config.window.title.clone();
        let mut changed = self.controls.reload(config);

        if let Some(path) = config.texture_path(base_dir)
            && self.source_path.as_deref() != Some(path.as_path())
        {
            self.gallery.select_path(&path);
            changed |= self.load_source(&path);
        }

        if changed {
            self.needs_redraw = true;
            Response::Redraw
        } else {
            Response::Retitle
        }
    }

    /// Draw one frame if anything changed since the last one
    pub fn draw_if_needed(&mut self, surface: &mut impl QuadSurface) -> bool {
        if !self.needs_redraw {
            return false;
        }
        self.draw(surface);
        true
    }

    pub fn draw(&mut self, surface: &mut impl QuadSurface) {
        let uniforms = self.controls.uniforms(surface.resolution());
        surface.draw_quad(&uniforms);
        self.needs_redraw = false;
    }
}
