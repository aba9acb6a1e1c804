//! Common test utilities and harness
//!
//! Provides reusable utilities for functional testing including:
//! - Fixture textures with distinct texels
//! - Test environment setup (temp config directory, images)
//! - Color assertion helpers

#![allow(dead_code)]

use std::path::PathBuf;

use image::RgbaImage;
use tempfile::TempDir;
use tileblend_core::{ImageTexture, Rgba, Vec2};

/// 4x4 texture where every texel has a different color
pub fn gradient_texture() -> ImageTexture {
    ImageTexture::from_image(&gradient_image(4, 4)).expect("fixture texture")
}

pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            (x * 255 / (width - 1).max(1)) as u8,
            (y * 255 / (height - 1).max(1)) as u8,
            ((x + y) * 37 % 256) as u8,
            255,
        ])
    })
}

/// 8x8 black and white checkerboard
pub fn checker_texture() -> ImageTexture {
    let img = RgbaImage::from_fn(8, 8, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([0, 0, 0, 255])
        }
    });
    ImageTexture::from_image(&img).expect("fixture texture")
}

/// Square grid of integer lattice coordinates in [-half, half)
pub fn lattice_grid(half: i32) -> Vec<Vec2> {
    (-half..half)
        .flat_map(|i| (-half..half).map(move |j| Vec2::new(i as f32, j as f32)))
        .collect()
}

/// Pearson correlation coefficient
pub fn correlation(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len());
    let n = a.len() as f64;
    let mean_a = a.iter().map(|&x| x as f64).sum::<f64>() / n;
    let mean_b = b.iter().map(|&x| x as f64).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let dx = x as f64 - mean_a;
        let dy = y as f64 - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }
    (cov / (var_a * var_b).sqrt()) as f32
}

/// Assert two colors agree per channel within `tolerance`
pub fn assert_color_near(actual: Rgba, expected: Rgba, tolerance: f32) {
    let channels = [
        (actual.r, expected.r),
        (actual.g, expected.g),
        (actual.b, expected.b),
        (actual.a, expected.a),
    ];
    for (a, e) in channels {
        assert!(
            (a - e).abs() <= tolerance,
            "Expected {:?}, got {:?} (tolerance {})",
            expected,
            actual,
            tolerance
        );
    }
}

/// Test environment with isolated config directory
pub struct TestEnvironment {
    /// Temporary directory for test config
    pub temp_dir: TempDir,
    /// Path to the config directory
    pub config_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().to_path_buf();

        std::fs::create_dir_all(config_dir.join("gallery"))
            .expect("Failed to create gallery directory");

        Self {
            temp_dir,
            config_dir,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Write a test config file
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write test config");
    }

    /// Save a PNG under the config directory and return its path
    pub fn write_image(&self, relative: &str, image: &RgbaImage) -> PathBuf {
        let path = self.config_dir.join(relative);
        image.save(&path).expect("Failed to write test image");
        path
    }

    pub fn gallery_dir(&self) -> PathBuf {
        self.config_dir.join("gallery")
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
