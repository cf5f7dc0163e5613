pub mod completions;
pub mod emotions;
pub mod init;
pub mod render;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};

use crate::types::Proportion;

/// faces - Layered LED face compositor
#[derive(Parser, Debug)]
#[command(name = "faces")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single frame to PNG
    Render(render::RenderArgs),

    /// List the emotions found in the eye directory
    Emotions(emotions::EmotionsArgs),

    /// Run the animated face, reading control commands from stdin
    Run(run::RunArgs),

    /// Write a default faces.yaml and asset directories
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Clap value parser for proportions.
pub fn parse_proportion(s: &str) -> std::result::Result<Proportion, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    Proportion::new(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_proportion() {
        assert_eq!(parse_proportion("0.5").unwrap().value(), 0.5);
        assert!(parse_proportion("1.5").is_err());
        assert!(parse_proportion("wide").is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "faces", "-vv", "render", "--emotion", "happy", "--eyes", "0.9", "--blank",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.emotion.as_deref(), Some("happy"));
        assert_eq!(args.eyes.value(), 0.9);
        assert!(args.blank);
    }

    #[test]
    fn test_cli_rejects_out_of_range() {
        assert!(Cli::try_parse_from(["faces", "render", "--mouth", "2"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }
}
