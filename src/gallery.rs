//! Example images the viewer can cycle through

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions the source image loader can decode
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Sorted list of images with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<PathBuf>,
    current: Option<usize>,
}

impl Gallery {
    /// Images directly inside `dir`, sorted by path
    pub fn scan(dir: &Path) -> io::Result<Self> {
        let mut images = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_image(&path) {
                images.push(path);
            }
        }
        log::info!("Found {} gallery images in {:?}", images.len(), dir);
        Ok(Self::from_paths(images))
    }

    pub fn from_paths(mut images: Vec<PathBuf>) -> Self {
        images.sort();
        Self { images, current: None }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.map(|i| self.images[i].as_path())
    }

    /// Point the cursor at `path` if it is part of the gallery
    pub fn select_path(&mut self, path: &Path) -> bool {
        match self.images.iter().position(|p| p == path) {
            Some(i) => {
                self.current = Some(i);
                true
            }
            None => false,
        }
    }

    /// Advance and return the new image; starts at the first one
    pub fn next_image(&mut self) -> Option<&Path> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(0, |i| (i + 1) % len));
        self.current()
    }

    /// Step back and return the new image; starts at the last one
    pub fn previous_image(&mut self) -> Option<&Path> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(len - 1, |i| (i + len - 1) % len));
        self.current()
    }
}
