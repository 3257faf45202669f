mod barb;
mod units;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;

use crate::barb::Sample;
use crate::units::SpeedUnit;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "windbarb")]
#[command(about = "Wind series aggregation for barb charts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate two series files into wind barbs
    Aggregate {
        /// JSON file with magnitude samples (km/h)
        magnitude: String,
        /// JSON file with direction samples (degrees)
        direction: String,
        #[arg(long, default_value_t = 20)]
        bins: usize,
        #[arg(long, value_enum, default_value_t = SpeedUnit::MetersPerSecond)]
        unit: SpeedUnit,
        /// Only keep samples within this window of the newest one (e.g. 24h)
        #[arg(long)]
        window: Option<String>,
    },
    /// Run the web server
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate {
            magnitude,
            direction,
            bins,
            unit,
            window,
        } => aggregate(&magnitude, &direction, bins, unit, window.as_deref()),
        Commands::Serve { config } => serve(&config),
    }
}

fn aggregate(
    magnitude: &str,
    direction: &str,
    bins: usize,
    unit: SpeedUnit,
    window: Option<&str>,
) -> ExitCode {
    let mut magnitude = match read_series(magnitude) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading magnitude series: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut direction = match read_series(direction) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading direction series: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(window) = window {
        let window = match parse_window(window) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Invalid window: {}", e);
                return ExitCode::FAILURE;
            }
        };
        trim_to_window(&mut magnitude, &mut direction, window);
    }

    match barb::generate_barbs(&magnitude, &direction, bins, unit) {
        Ok(barbs) => match serde_json::to_string_pretty(&barbs) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error encoding output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_series(path: &str) -> Result<Vec<Sample>, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

fn parse_window(s: &str) -> Result<chrono::Duration, String> {
    humantime::parse_duration(s.trim())
        .map_err(|e| e.to_string())
        .and_then(|d| chrono::Duration::from_std(d).map_err(|e| e.to_string()))
}

/// Drop samples older than `window` before the newest sample in either feed.
fn trim_to_window(magnitude: &mut Vec<Sample>, direction: &mut Vec<Sample>, window: chrono::Duration) {
    let newest = magnitude
        .last()
        .map(|s| s.timestamp)
        .into_iter()
        .chain(direction.last().map(|s| s.timestamp))
        .max();

    if let Some(newest) = newest {
        let cutoff = newest - window;
        magnitude.retain(|s| s.timestamp >= cutoff);
        direction.retain(|s| s.timestamp >= cutoff);
    }
}
