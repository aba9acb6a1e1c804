//! Tile-Blend Configuration Management
//!
//! Handles loading and managing configuration from ~/.tileblend/config.toml
//! (or `$TILEBLEND_CONFIG_DIR/config.toml`). Supports hot-reloading and
//! default config generation.

pub mod watcher;

pub use watcher::{ConfigEvent, ConfigWatcher};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tileblend_core::{TileBlendParams, Variant, Wave};

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = ".tileblend";
/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TILEBLEND_CONFIG_DIR";

/// General configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Sampler variant: "rigid" or "warped"
    pub variant: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default().name().to_string(),
        }
    }
}

/// Initial slider values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub rotation: f32,
    pub blend_falloff: f32,
    pub blend_offset: f32,
    pub scale: f32,
    pub wave_amplitude: f32,
    pub wave_period: f32,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self::from(&TileBlendParams::default())
    }
}

impl From<&TileBlendParams> for ParamsConfig {
    fn from(params: &TileBlendParams) -> Self {
        Self {
            rotation: params.rotation,
            blend_falloff: params.blend_falloff,
            blend_offset: params.blend_offset,
            scale: params.scale,
            wave_amplitude: params.wave.amplitude,
            wave_period: params.wave.period,
        }
    }
}

impl From<&ParamsConfig> for TileBlendParams {
    fn from(config: &ParamsConfig) -> Self {
        Self {
            rotation: config.rotation,
            blend_falloff: config.blend_falloff,
            blend_offset: config.blend_offset,
            scale: config.scale,
            wave: Wave {
                amplitude: config.wave_amplitude,
                period: config.wave_period,
            },
        }
    }
}

/// Source image configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// Image shown at startup; relative paths resolve against the config dir
    pub path: Option<PathBuf>,
    /// Directory of example images to cycle through
    pub gallery_dir: Option<PathBuf>,
}

/// Window configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner width in logical pixels
    pub width: u32,
    /// Initial inner height in logical pixels
    pub height: u32,
    /// Window title prefix
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 640,
            title: "Tile Blend".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub params: ParamsConfig,

    #[serde(default)]
    pub texture: TextureConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            log::info!("Config file not found, creating default at {:?}", config_path);
            Self::create_default_config()?;
        }

        let config = Self::load_from(&config_path)?;
        log::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Write this configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(self)?;
        let content = format!(
            "# Tile Blend Configuration\n\
             #\n\
             # variant: \"rigid\" (plain lattice) or \"warped\" (sinusoidal warp)\n\
             # texture.path: image to tile, relative to this directory\n\
             \n\
             {toml_content}"
        );
        fs::write(path, content).map_err(|e| ConfigError::Write(path.to_path_buf(), e))
    }

    /// Get the configuration directory path
    ///
    /// `$TILEBLEND_CONFIG_DIR` when set, otherwise ~/.tileblend/
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file path
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the default configuration file and directory
    pub fn create_default_config() -> Result<(), ConfigError> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).map_err(|e| ConfigError::CreateDir(config_dir.clone(), e))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Config::default().save_to(&config_path)?;

        log::info!("Created default configuration at {:?}", config_path);
        Ok(())
    }

    /// Sampler variant, falling back to the default for unknown names
    pub fn variant(&self) -> Variant {
        match self.general.variant.to_lowercase().as_str() {
            "rigid" => Variant::Rigid,
            "warped" => Variant::Warped,
            other => {
                log::warn!("Unknown variant '{}', falling back to rigid", other);
                Variant::Rigid
            }
        }
    }

    pub fn params(&self) -> TileBlendParams {
        TileBlendParams::from(&self.params)
    }

    pub fn set_params(&mut self, params: &TileBlendParams) {
        self.params = ParamsConfig::from(params);
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.general.variant = variant.name().to_string();
    }

    /// Resolve a configured path against `base` (normally the config dir)
    pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
        if path.is_relative() {
            base.join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Startup image path, resolved against `base`
    pub fn texture_path(&self, base: &Path) -> Option<PathBuf> {
        self.texture.path.as_deref().map(|p| Self::resolve_path(base, p))
    }

    /// Gallery directory, resolved against `base`
    pub fn gallery_dir(&self, base: &Path) -> Option<PathBuf> {
        self.texture.gallery_dir.as_deref().map(|p| Self::resolve_path(base, p))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,
    #[error("Failed to read {0:?}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse {0:?}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to write {0:?}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
    #[error("Failed to create {0:?}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("Failed to watch files: {0}")]
    Watch(String),
}
