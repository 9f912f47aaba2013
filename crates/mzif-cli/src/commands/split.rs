use super::{load_container, save_container};
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use mzif::engine::progress::ProgressReporter;
use mzif::workflows;

pub fn run(config: &AppConfig, threshold: f64) -> Result<()> {
    let output = config.output.as_deref().ok_or_else(|| {
        CliError::Argument("--split requires an output container (-o PATH).".to_string())
    })?;

    let dataset = load_container(&config.input)?;
    let handler = CliProgressHandler::new(config.progress_enabled);
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let split = workflows::split::run(dataset, threshold, &reporter)?;
    save_container(&split, output)?;

    println!(
        "✓ Split {} structures at RMSD {} into: {}",
        split.len(),
        threshold,
        output.display()
    );
    Ok(())
}
