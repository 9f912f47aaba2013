use super::load_container;
use crate::config::models::AppConfig;
use crate::error::Result;
use mzif::engine::summary::SummaryOptions;
use mzif::workflows;
use std::io::{self, Write};

pub fn run(config: &AppConfig) -> Result<()> {
    let dataset = load_container(&config.input)?;
    let options = SummaryOptions {
        list_models: config.list_models,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    workflows::show::run(&dataset, options, &mut out)?;
    out.flush()?;
    Ok(())
}
