//! App configuration (faces.yaml) parsing.
//!
//! The config names the asset directories, the frame rate the drivers tick
//! at, the output resolution and where each layer is placed on the canvas.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::BlinkTiming;
use crate::error::{FacesError, Result};
use crate::types::Origin;

/// Slowest accepted frame rate (one frame every 100 seconds).
pub const MIN_FRAME_RATE: f32 = 0.01;

/// App configuration loaded from faces.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacesConfig {
    /// Asset root. Relative paths resolve against the config file's directory.
    pub resources: PathBuf,

    /// Emotion directory under `resources`, one sub-directory per emotion.
    pub eyes: PathBuf,

    /// Mouth-strip frame directory under `resources`.
    pub mouth: PathBuf,

    /// Static overlay image (nose) under `resources`.
    pub overlay: PathBuf,

    /// Background head image under `resources`.
    pub head: PathBuf,

    /// Emotion shown before any control command arrives.
    pub default_emotion: String,

    /// Frames per second for rendering and animation ticks.
    pub frame_rate: f32,

    /// Output resolution the face is drawn for.
    pub resolution: Resolution,

    /// Layer placement on the canvas.
    pub layout: Layout,

    /// Blink envelope timing.
    pub blink: BlinkTiming,
}

impl Default for FacesConfig {
    fn default() -> Self {
        Self {
            resources: PathBuf::from("static/protogen_images"),
            eyes: PathBuf::from("eyes"),
            mouth: PathBuf::from("mouth"),
            overlay: PathBuf::from("static/nose.png"),
            head: PathBuf::from("static/head.png"),
            default_emotion: "neutral".to_string(),
            frame_rate: 24.0,
            resolution: Resolution::default(),
            layout: Layout::default(),
            blink: BlinkTiming::default(),
        }
    }
}

/// Output surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(128, 32)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Origin of each compositing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub head: Origin,
    pub mouth: Origin,
    pub eyes: Origin,
    pub overlay: Origin,
}

/// Resolved absolute asset locations.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub eyes: PathBuf,
    pub mouth: PathBuf,
    pub overlay: PathBuf,
    pub head: PathBuf,
}

impl FacesConfig {
    /// Load config from a faces.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FacesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string and validate it.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| FacesError::Parse {
                message: format!("Invalid config: {}", e),
                help: Some("Check faces.yaml syntax".to_string()),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FacesError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() || self.frame_rate < MIN_FRAME_RATE {
            return Err(FacesError::Validation {
                message: format!(
                    "frame_rate must be at least {}, got {}",
                    MIN_FRAME_RATE, self.frame_rate
                ),
                help: Some("24.0 matches most LED panels".to_string()),
            });
        }

        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(FacesError::Validation {
                message: format!("resolution must be non-zero, got {}", self.resolution),
                help: None,
            });
        }

        self.blink.validate()
    }

    /// Resolve asset paths against the directory holding the config.
    pub fn asset_paths(&self, config_dir: &Path) -> AssetPaths {
        let root = if self.resources.is_absolute() {
            self.resources.clone()
        } else {
            config_dir.join(&self.resources)
        };

        AssetPaths {
            eyes: root.join(&self.eyes),
            mouth: root.join(&self.mouth),
            overlay: root.join(&self.overlay),
            head: root.join(&self.head),
        }
    }

    /// Duration of one frame.
    pub fn frame_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.frame_rate))
    }
}
