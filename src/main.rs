use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use parkade::config::{FileConfig, FloorLayout};
use parkade::console::Console;
use parkade::facility::Lot;
use parkade::logging::StderrLogger;

/// Multi-floor parking lot console
///
/// Examples:
///   # Run with the default three-floor layout
///   parkade
///
///   # Two floors: groups of 5,3,2 spots and one group of 8
///   parkade --floor 5,3,2 --floor 8
///
///   # Use a config file and print availability without the menu
///   parkade --config lot.toml --report
#[derive(Parser, Debug)]
#[command(name = "parkade")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches parkade.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spot group sizes for one floor, comma separated; repeat per floor
    #[arg(long = "floor", value_name = "GROUPS")]
    floors: Vec<FloorLayout>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print available spots per floor and exit
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().is_some_and(|c| c.verbose);
    StderrLogger::init(verbose).context("Failed to install logger")?;

    let floors = if !args.floors.is_empty() {
        args.floors
    } else {
        file_config
            .map(|c| c.floors)
            .unwrap_or_else(parkade::config::default_floors)
    };

    if verbose {
        println!("Configuration:");
        for (i, layout) in floors.iter().enumerate() {
            println!(
                "  Floor {}: groups {} ({} spots)",
                i + 1,
                layout,
                layout.total_spots()
            );
        }
        println!();
    }

    let lot = Lot::new(&floors).context("Failed to build parking lot")?;

    let stdin = io::stdin();
    let mut console = Console::new(&lot, stdin.lock(), io::stdout());

    if args.report {
        return console.print_report();
    }
    console.run()
}
