//! Run command implementation.
//!
//! Starts the animated face, applies control commands read from stdin (one
//! per line) and rewrites the output PNG every frame.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use clap::Args;

use crate::animation::{ConstantLevel, Oscillator, ProportionProvider, Ticker};
use crate::app::FacesApp;
use crate::control::ControlSurface;
use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, FrameCanvas};
use crate::types::Proportion;

use super::parse_proportion;

/// Run the animated face, reading control commands from stdin
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Face directory or faces.yaml path
    #[arg(long, short, default_value = ".")]
    pub config: PathBuf,

    /// PNG rewritten with the latest frame
    #[arg(long, short, default_value = "frame.png")]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Stop after this many frames (default: run until interrupted)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Constant mouth openness in [0, 1]
    #[arg(long, default_value = "0.0", value_parser = parse_proportion)]
    pub mouth_level: Proportion,

    /// Open and close the mouth at this frequency instead of a constant level
    #[arg(long, conflicts_with = "mouth_level")]
    pub mouth_hz: Option<f64>,
}

impl RunArgs {
    fn mouth_provider(&self) -> Arc<dyn ProportionProvider> {
        match self.mouth_hz {
            Some(hz) => Arc::new(Oscillator::new(hz)),
            None => Arc::new(ConstantLevel(self.mouth_level)),
        }
    }
}

pub fn run(args: RunArgs, printer: &Printer) -> Result<()> {
    let found = discover(&args.config)?;
    let app = FacesApp::initialize(found.config, &found.root, args.mouth_provider())?;

    printer.status(
        "Running",
        &format!(
            "{} at {} fps -> {}",
            plural(app.renderer().emotion_drawer().emotions().len(), "emotion", "emotions"),
            app.frame_rate(),
            display_path(&args.output)
        ),
    );

    let commands = spawn_stdin_reader()?;
    run_loop(app, &args, &commands, &mut io::stdout(), printer)
}

/// Render frames until the frame limit, applying queued commands each tick.
pub fn run_loop(
    mut app: FacesApp,
    args: &RunArgs,
    commands: &Receiver<String>,
    out: &mut dyn Write,
    printer: &Printer,
) -> Result<()> {
    let resolution = app.config().resolution;
    let mut canvas = FrameCanvas::new(resolution.width, resolution.height);
    let mut ticker = Ticker::new(app.config().frame_period());
    let mut rendered: u64 = 0;

    app.set_active(true);

    while args.frames.map_or(true, |limit| rendered < limit) {
        apply_commands(&app.control(), commands.try_iter(), out, printer)?;

        app.render(&mut canvas);
        write_png(&canvas, &args.output, args.scale)?;
        rendered += 1;

        ticker.wait();
    }

    app.shutdown();
    printer.status("Stopped", &format!("after {}", plural(rendered as usize, "frame", "frames")));
    Ok(())
}

/// Handle command lines, writing non-empty responses to `out`.
///
/// Bad commands are reported and skipped; they never stop the face.
pub fn apply_commands(
    control: &ControlSurface<'_>,
    lines: impl Iterator<Item = String>,
    out: &mut dyn Write,
    printer: &Printer,
) -> Result<()> {
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        match control.handle_line(&line) {
            Ok(response) if response.body.is_empty() => {}
            Ok(response) => writeln!(out, "{}", response.body)?,
            Err(e) => printer.error("Rejected", &e.to_string()),
        }
    }

    out.flush()?;
    Ok(())
}

/// Forward stdin lines to a channel from a background thread.
fn spawn_stdin_reader() -> Result<Receiver<String>> {
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new()
        .name("faces-control".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if sender.send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("control input closed");
        })?;

    Ok(receiver)
}
