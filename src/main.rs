use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use inkboard::Config;
use inkboard::replay::{self, Script};
use std::fs;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("INKBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, long_version = LONG_VERSION, about = "Headless driver for the inkboard annotation core")]
struct Cli {
    /// Replay a TOML event script and report the resulting annotations
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Write the replay report to FILE instead of stdout
    #[arg(long, short = 'o', value_name = "FILE", requires = "replay")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/inkboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,

    /// Write the documented default config to ~/.config/inkboard/config.toml
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["replay", "print_config"])]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if cli.replay.is_none() && !cli.print_config {
        print_usage();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.print_config {
        print!("{}", config.to_toml()?);
    }

    if let Some(script_path) = &cli.replay {
        let script = Script::load(script_path)?;
        log::info!(
            "Replaying {} event(s) from {}",
            script.events.len(),
            script_path.display()
        );

        let report = replay::run(&script, &config)?;
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

        match &cli.output {
            Some(path) => {
                fs::write(path, format!("{json}\n"))
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                log::info!("Wrote replay report to {}", path.display());
            }
            None => println!("{json}"),
        }
    }

    Ok(())
}

fn print_usage() {
    println!("inkboard: Headless driver for the inkboard annotation core");
    println!();
    println!("Usage:");
    println!("  inkboard --replay <FILE>              Replay an event script, print JSON");
    println!("  inkboard --replay <FILE> -o <OUT>     Write the JSON report to OUT");
    println!("  inkboard --print-config               Show the effective configuration");
    println!("  inkboard --init-config                Create ~/.config/inkboard/config.toml");
    println!("  inkboard --help                       Show help");
    println!();
    println!("Event scripts are TOML files with [[events]] tables:");
    println!("  type = \"press\" | \"motion\" | \"release\"   (x, y, optional button)");
    println!("  type = \"scroll\"                         (delta)");
    println!("  type = \"action\"                         (action = \"undo\", \"clear\", ...)");
    println!("  type = \"tool\" | \"shape\" | \"size\" | \"color\"");
    println!();
    println!("Set RUST_LOG=debug to trace every replayed event.");
}
