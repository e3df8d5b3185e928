//! Weather layer converter.
//!
//! Converts gridded weather payloads and the storm list published by the
//! upstream feed into the JSON layers the map renderer loads.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use converter::{parse_kinds, run_cyclones, run_grids, ConverterConfig};

#[derive(Parser, Debug)]
#[command(name = "converter")]
#[command(about = "Converts weather feed payloads into renderer-ready layers")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the raw payloads (overrides WEATHER_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory for converted layers (overrides WEATHER_OUTPUT_DIR)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Feed cycle in payload file names, e.g. 1200 (overrides WEATHER_CYCLE)
    #[arg(long, global = true)]
    cycle: Option<String>,

    /// Pretty-print output JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert gridded payloads
    Grid {
        /// Field kind: wind, current, wave, sst, airpressure, a comma-separated list, or all
        #[arg(short, long, default_value = "all")]
        kind: String,
    },

    /// Convert the storm list
    Cyclones,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&args)?;
    info!(
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        cycle = %config.cycle,
        "Loaded configuration"
    );

    match args.command {
        Command::Grid { kind } => {
            let kinds = parse_kinds(&kind)?;
            let written = run_grids(kinds, config).await?;
            info!(layers = written.len(), "Grid conversion complete");
        }
        Command::Cyclones => {
            let (path, storms) = run_cyclones(config).await?;
            info!(storms, output = %path.display(), "Cyclone conversion complete");
        }
    }

    Ok(())
}

/// Environment first, then command-line overrides.
fn load_config(args: &Args) -> Result<ConverterConfig> {
    let mut config = ConverterConfig::from_env();

    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(cycle) = &args.cycle {
        config.cycle = cycle.clone();
    }
    if args.pretty {
        config.pretty = true;
    }

    config.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}
