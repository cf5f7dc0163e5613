//! Emotions command implementation.
//!
//! Lists the emotions whose eye strips loaded, in discovery order.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::{FacesError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::EmotionDrawer;

/// List the emotions found in the eye directory
#[derive(Args, Debug)]
pub struct EmotionsArgs {
    /// Face directory or faces.yaml path
    #[arg(long, short, default_value = ".")]
    pub config: PathBuf,

    /// Print a JSON array instead of one name per line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: EmotionsArgs, printer: &Printer) -> Result<()> {
    let found = discover(&args.config)?;
    let eyes = found.asset_paths().eyes;
    let drawer = EmotionDrawer::load(&eyes, found.config.layout.eyes);

    println!("{}", listing(&drawer, args.json)?);
    printer.info(
        "Scanned",
        &format!(
            "{} ({})",
            display_path(&eyes),
            plural(drawer.emotions().len(), "emotion", "emotions")
        ),
    );
    Ok(())
}

/// The text printed to stdout.
pub fn listing(drawer: &EmotionDrawer, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(drawer.emotions()).map_err(|e| FacesError::Parse {
            message: format!("Failed to serialize emotions: {}", e),
            help: None,
        })
    } else {
        Ok(drawer.emotions_separated_by_newline())
    }
}
