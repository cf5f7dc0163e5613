//! Render command implementation.
//!
//! Composites one frame for an explicit expression and writes it as PNG.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{write_png, FrameCanvas, Renderer};
use crate::state::ExpressionSnapshot;
use crate::types::Proportion;

use super::parse_proportion;

/// Render a single frame to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Face directory or faces.yaml path
    #[arg(long, short, default_value = ".")]
    pub config: PathBuf,

    /// Emotion to draw (default: the config's default_emotion)
    #[arg(long)]
    pub emotion: Option<String>,

    /// Eye openness in [0, 1]
    #[arg(long, default_value = "1.0", value_parser = parse_proportion)]
    pub eyes: Proportion,

    /// Mouth openness in [0, 1]
    #[arg(long, default_value = "0.0", value_parser = parse_proportion)]
    pub mouth: Proportion,

    /// Render a blank frame
    #[arg(long)]
    pub blank: bool,

    /// Output PNG path
    #[arg(long, short, default_value = "face.png")]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let found = discover(&args.config)?;
    let renderer = Renderer::load(&found.asset_paths(), &found.config.layout)?;

    let emotion = args
        .emotion
        .unwrap_or_else(|| found.config.default_emotion.clone());
    if !renderer.emotion_drawer().contains(&emotion) {
        printer.warning("Unknown", &format!("emotion '{}', eyes will be skipped", emotion));
    }

    let expression = ExpressionSnapshot {
        emotion,
        eye_openness: args.eyes,
        mouth_openness: args.mouth,
        blank: args.blank,
    };

    let resolution = found.config.resolution;
    let mut canvas = FrameCanvas::new(resolution.width, resolution.height);
    renderer.render_snapshot(&expression, &mut canvas);

    write_png(&canvas, &args.output, args.scale)?;
    printer.status(
        "Rendered",
        &format!("{} ({}) -> {}", expression.emotion, resolution, display_path(&args.output)),
    );

    Ok(())
}
