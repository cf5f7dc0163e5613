//! Configuration and asset discovery for faces.
//!
//! This module finds `faces.yaml`, scans the asset directories it names and
//! decodes frame images into spectrums.
//!
//! # Example
//!
//! ```ignore
//! use faces::discovery::discover;
//!
//! let found = discover("./my-face")?;
//! let renderer = faces::Renderer::load(&found.asset_paths(), &found.config.layout)?;
//! ```

mod config;
mod loader;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::{AssetPaths, FacesConfig, Layout, Resolution, MIN_FRAME_RATE};
pub use loader::{load_bitmap, load_emotion_spectrums, load_spectrum};
pub use scanner::{parse_frame_position, scan_emotions, scan_frames, FrameFile};

/// The name of the config file.
pub const CONFIG_FILENAME: &str = "faces.yaml";

/// Result of looking for a config in a directory.
#[derive(Debug)]
pub struct Discovery {
    /// Directory that relative asset paths resolve against.
    pub root: PathBuf,

    /// The loaded config (default if no faces.yaml was found).
    pub config: FacesConfig,

    /// Whether a faces.yaml was found.
    pub has_config: bool,
}

impl Discovery {
    pub fn asset_paths(&self) -> AssetPaths {
        self.config.asset_paths(&self.root)
    }
}

/// Discover the config for a face directory.
///
/// `path` may be a directory (looked up for `faces.yaml`) or the config file
/// itself. A directory without a config uses the defaults.
pub fn discover(path: impl AsRef<Path>) -> Result<Discovery> {
    let path = path.as_ref();

    if path.is_file() {
        let root = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        return Ok(Discovery {
            root,
            config: FacesConfig::load(path)?,
            has_config: true,
        });
    }

    let root = path.to_path_buf();
    let config_path = root.join(CONFIG_FILENAME);
    let (config, has_config) = if config_path.exists() {
        (FacesConfig::load(&config_path)?, true)
    } else {
        (FacesConfig::default(), false)
    };

    Ok(Discovery {
        root,
        config,
        has_config,
    })
}
