use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use knights_tour::chess::notation::{format_route, parse_square};
use knights_tour::config::TourConfig;
use knights_tour::search::warnsdorff::TourEngine;
use knights_tour::TourOutcome;

#[derive(Parser, Debug)]
#[command(name = "knights_tour")]
#[command(version, about = "Find a knight's tour with Warnsdorff's rule", long_about = None)]
struct Cli {
    /// Start square in chess notation, e.g. e5.
    start: String,

    /// JSON file with board dimensions ({"width": .., "height": ..}).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board width (overrides the config file).
    #[arg(long)]
    width: Option<u32>,

    /// Board height (overrides the config file).
    #[arg(long)]
    height: Option<u32>,

    /// Squares printed per line.
    #[arg(long, default_value_t = 20)]
    per_line: usize,

    /// Print the tour as JSON.
    #[arg(long)]
    json: bool,

    /// Exit with status 1 if the tour does not cover the board.
    #[arg(long)]
    require_complete: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => match TourConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::from(2);
            }
        },
        None => TourConfig::default(),
    };
    if let Some(w) = cli.width {
        cfg = cfg.with_width(w);
    }
    if let Some(h) = cli.height {
        cfg = cfg.with_height(h);
    }
    if let Err(e) = cfg.validate() {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    let start = match parse_square(&cli.start, cfg.width, cfg.height) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}\nUsage: knights_tour <start_cell>, for example: knights_tour e5");
            return ExitCode::from(2);
        }
    };

    let engine = match TourEngine::new(start, cfg.width, cfg.height) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let tour = engine.run();
    info!(len = tour.len(), cells = tour.cell_count(), "route computed");

    if cli.json {
        match serde_json::to_string_pretty(&tour) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize tour: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("The following route found:");
        println!("{}", format_route(tour.route(), cli.per_line));
        println!();
    }

    match tour.outcome() {
        TourOutcome::Complete => ExitCode::SUCCESS,
        TourOutcome::Incomplete { visited, missing } => {
            warn!(visited, missing, "tour is incomplete");
            if cli.require_complete {
                eprintln!("Incomplete tour: {visited} squares visited, {missing} missed");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
