use super::save_container;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use mzif::engine::progress::ProgressReporter;
use mzif::workflows;
use tracing::{info, warn};

pub fn run(config: &AppConfig) -> Result<()> {
    info!("Converting ensemble text {:?}", config.input);
    let handler = CliProgressHandler::new(config.progress_enabled);
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let outcome = workflows::convert::run(&config.input, &reporter)?;
    let structures = outcome.entries.len();
    let models = outcome.model_count();
    let skipped = outcome.skipped_count();

    println!(
        "Parsed {} structures with {} models ({} skipped).",
        structures, models, skipped
    );

    match &config.output {
        Some(path) => {
            save_container(&outcome.into_dataset(), path)?;
            println!("✓ Container written to: {}", path.display());
        }
        None => warn!("No output path given; the parsed data was not saved."),
    }
    Ok(())
}
