//! Init command implementation.
//!
//! Writes a `faces.yaml` with every default spelled out and creates the
//! asset directories it points at.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{FacesConfig, CONFIG_FILENAME};
use crate::error::{FacesError, Result};
use crate::output::{display_path, Printer};

/// Write a default faces.yaml and asset directories
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Face directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing faces.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(FacesError::Validation {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = FacesConfig::default();
    let paths = config.asset_paths(&args.path);

    for dir in [
        paths.eyes.join(&config.default_emotion),
        paths.mouth.clone(),
        parent_of(&paths.overlay),
        parent_of(&paths.head),
    ] {
        create_dir(&dir)?;
    }

    fs::write(&config_path, config.to_yaml()?).map_err(|e| FacesError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    printer.info(
        "Assets",
        &format!(
            "put eye strips in {}/<emotion>/, mouth frames in {}",
            display_path(&paths.eyes),
            display_path(&paths.mouth)
        ),
    );

    Ok(())
}

fn parent_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| FacesError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}
