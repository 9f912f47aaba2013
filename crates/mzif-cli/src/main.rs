mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::config::PartialAppConfig;
use crate::config::models::Mode;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 mzif2bin v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let partial = match &cli.config {
        Some(path) => PartialAppConfig::from_file(path)?,
        None => PartialAppConfig::default(),
    };
    let config = partial.merge_with_cli(&cli)?;
    debug!("Resolved configuration: {:?}", &config);

    let command_result = match config.mode {
        Mode::Convert => {
            info!("Dispatching to convert.");
            commands::convert::run(&config)
        }
        Mode::Show => {
            info!("Dispatching to show.");
            commands::show::run(&config)
        }
        Mode::Split { threshold } => {
            info!("Dispatching to split at threshold {}.", threshold);
            commands::split::run(&config, threshold)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
