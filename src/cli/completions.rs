//! Shell completion scripts for the faces binary.

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::Result;
use crate::output::{display_path, Printer};

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory instead of stdout
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs, printer: &Printer) -> Result<()> {
    let mut cmd = super::Cli::command();

    match args.dir {
        Some(dir) => {
            let path = clap_complete::generate_to(args.shell, &mut cmd, "faces", &dir)?;
            printer.status("Wrote", &display_path(&path));
        }
        None => clap_complete::generate(args.shell, &mut cmd, "faces", &mut std::io::stdout()),
    }

    Ok(())
}
