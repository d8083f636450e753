//! # Linepad - A Minimal Line Editor
//!
//! One editable row per line, a line-number gutter that always matches the
//! line count, and a configurable floor on how few lines may remain.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Start with 40 lines, never fewer than 5
//! cargo run -- --initial-lines 40 --min-lines 5
//!
//! # Dump the initial state as JSON instead of opening a window
//! cargo run -- --print-state
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linepad_core::{Config, EditorController};

/// Linepad - a minimal line editor
#[derive(Parser, Debug)]
#[command(name = "linepad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to load instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of lines to start with
    #[arg(long, value_name = "N")]
    initial_lines: Option<usize>,

    /// Fewest lines the editor will keep
    #[arg(long, value_name = "N")]
    min_lines: Option<usize>,

    /// Print the initial editor state as JSON and exit
    #[arg(long)]
    print_state: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Loads config and applies command line overrides.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(initial_lines) = self.initial_lines {
            config.editor.initial_lines = initial_lines;
        }
        if let Some(min_lines) = self.min_lines {
            config.editor.min_lines = min_lines;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Linepad v{}", env!("CARGO_PKG_VERSION"));

    let config = args.config()?;

    if args.print_state {
        let editor = EditorController::from_config(&config)?;
        println!("{}", editor.snapshot().to_json()?);
        return Ok(());
    }

    linepad_ui::run(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["linepad"]);
        assert!(args.config.is_none());
        assert!(!args.print_state);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_line_counts() {
        let args = Args::parse_from(["linepad", "--initial-lines", "40", "--min-lines", "5", "-vv"]);
        assert_eq!(args.initial_lines, Some(40));
        assert_eq!(args.min_lines, Some(5));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_overrides_are_validated() {
        let args = Args::parse_from([
            "linepad",
            "--config",
            "/nonexistent/linepad.toml",
        ]);
        assert!(args.config().is_err());

        let args = Args {
            config: None,
            initial_lines: Some(3),
            min_lines: Some(8),
            print_state: true,
            verbose: 0,
        };
        assert!(args.config().is_err());
    }
}
