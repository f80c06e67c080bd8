// Copyright (c) 2025 Sharpe Screener contributors. All rights reserved.

mod config;
mod consts;
mod data;
mod error;
mod events;
mod logging;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::screener_consts::filters;
use crate::data::export::{self, ExportFormat};
use crate::data::filter::{FilterCriteria, apply_filters};
use crate::data::loader::{DatasetCache, read_records};
use crate::data::record::sector_options;
use crate::data::refresh::run_refresh;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive screener dashboard
    Start {
        /// Path of the precomputed dataset file
        #[arg(long, value_name = "FILE")]
        data_file: Option<PathBuf>,

        /// Refresh command as program followed by its arguments
        #[arg(long, value_name = "ARGV", num_args = 1.., allow_hyphen_values = true)]
        refresh_command: Option<Vec<String>>,

        /// Disable the dashboard background fill
        #[arg(long)]
        no_background: bool,
    },
    /// Run the external computation script and reload the dataset
    Refresh {
        /// Path of the precomputed dataset file
        #[arg(long, value_name = "FILE")]
        data_file: Option<PathBuf>,

        /// Refresh command as program followed by its arguments
        #[arg(long, value_name = "ARGV", num_args = 1.., allow_hyphen_values = true)]
        refresh_command: Option<Vec<String>>,
    },
    /// Write a filtered CSV or JSON snapshot without starting the dashboard
    Export {
        /// Path of the precomputed dataset file
        #[arg(long, value_name = "FILE")]
        data_file: Option<PathBuf>,

        /// Minimum Sharpe ratio (inclusive)
        #[arg(long, default_value_t = filters::DEFAULT_MIN_SHARPE)]
        min_sharpe: f64,

        /// Lower beta bound (inclusive)
        #[arg(long, default_value_t = filters::DEFAULT_BETA_RANGE.0)]
        beta_min: f64,

        /// Upper beta bound (inclusive)
        #[arg(long, default_value_t = filters::DEFAULT_BETA_RANGE.1)]
        beta_max: f64,

        /// Sector to keep, repeatable; defaults to every sector observed
        #[arg(long, value_name = "SECTOR")]
        sector: Vec<String>,

        /// Snapshot format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Directory the dated artifact is written into
        #[arg(long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            data_file,
            refresh_command,
            no_background,
        } => {
            let config = resolve_config(&config_path, data_file, refresh_command);
            start(config, !no_background).await
        }
        Command::Refresh {
            data_file,
            refresh_command,
        } => {
            let config = resolve_config(&config_path, data_file, refresh_command);
            match refresh(config).await {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Refresh failed: {}", e);
                    Err(e)
                }
            }
        }
        Command::Export {
            data_file,
            min_sharpe,
            beta_min,
            beta_max,
            sector,
            format,
            output_dir,
        } => {
            let config = resolve_config(&config_path, data_file, None);
            match export_snapshot(
                config,
                min_sharpe,
                (beta_min, beta_max),
                sector,
                format,
                &output_dir,
            ) {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Export failed: {}", e);
                    Err(e)
                }
            }
        }
    }
}

/// User configuration with command-line overrides applied.
fn resolve_config(
    config_path: &Path,
    data_file: Option<PathBuf>,
    refresh_command: Option<Vec<String>>,
) -> Config {
    let mut config = Config::load_or_default(config_path);
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    if let Some(refresh_command) = refresh_command {
        config.refresh_command = refresh_command;
    }
    config
}

/// Starts the interactive screener dashboard.
///
/// # Arguments
/// * `config` - Dataset location and refresh command.
/// * `with_background_color` - Whether the dashboard paints its background.
async fn start(config: Config, with_background_color: bool) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(config, ui::UIConfig {
        with_background_color,
    });
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

/// Headless refresh: runs the script to completion, then reloads.
async fn refresh(config: Config) -> Result<(), Box<dyn Error>> {
    println!("Fetching latest data... this may take 3-5 minutes.");
    let mut cache = DatasetCache::new();
    let (records, elapsed) =
        run_refresh(&config.refresh_command, &mut cache, &config.data_file).await?;
    println!(
        "Data refreshed in {} seconds! {} securities loaded.",
        elapsed,
        records.len()
    );
    Ok(())
}

/// Headless export of the filtered record set.
fn export_snapshot(
    config: Config,
    min_sharpe: f64,
    beta_range: (f64, f64),
    sector: Vec<String>,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let records = read_records(&config.data_file)?;

    // An empty selection means the flag was not given: default to all
    // sectors observed in the dataset.
    let sectors: HashSet<String> = if sector.is_empty() {
        sector_options(&records).into_iter().collect()
    } else {
        sector.into_iter().collect()
    };

    let criteria = FilterCriteria {
        min_sharpe,
        beta_range,
        sectors,
    };
    let filtered = apply_filters(&records, &criteria);

    let path = export::export_path(output_dir, format);
    export::write_snapshot(&path, &filtered, format)?;
    println!("Exported {} rows to {}", filtered.len(), path.display());
    Ok(())
}
