use clap::Parser;
use faces::cli::{Cli, Commands};
use faces::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => faces::cli::render::run(args, &printer)?,
        Commands::Emotions(args) => faces::cli::emotions::run(args, &printer)?,
        Commands::Run(args) => faces::cli::run::run(args, &printer)?,
        Commands::Init(args) => faces::cli::init::run(args, &printer)?,
        Commands::Completions(args) => faces::cli::completions::run(args, &printer)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the crate's level.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "faces=warn",
        1 => "faces=debug",
        _ => "faces=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
