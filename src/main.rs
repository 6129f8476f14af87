use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use strokeboard::{Config, StrokeLog, input};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STROKEBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "strokeboard")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand stroke log with point-level undo and redo"
)]
struct Cli {
    /// Replay an event script and print the resulting drawing state ('-' reads stdin)
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Load configuration from this file instead of ~/.config/strokeboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.replay else {
        println!("strokeboard: Freehand stroke log with point-level undo and redo");
        println!();
        println!("Usage:");
        println!("  strokeboard --replay <FILE>    Replay an event script ('-' for stdin)");
        println!("  strokeboard --help             Show help");
        println!();
        println!("Script format (one event per line, '#' starts a comment):");
        println!("  start <x> <y>       pen down");
        println!("  push <x> <y>        pointer moved while drawing");
        println!("  stop                pen up");
        println!("  set strokeWidth <w> width for future points");
        println!("  set strokeColor <c> color name or r,g,b");
        println!("  undo | redo | clear");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = if script_path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        text
    } else {
        fs::read_to_string(&script_path)
            .with_context(|| format!("Failed to read script {}", script_path.display()))?
    };

    let events = input::parse_script(&script)
        .with_context(|| format!("Invalid event script {}", script_path.display()))?;
    log::info!("Replaying {} event(s)", events.len());

    let mut log = StrokeLog::from_config(&config);
    let snapshot = log.apply_all(events);
    print!("{snapshot}");

    Ok(())
}
