use crate::core::models::dataset::Dataset;
use crate::engine::error::EngineError;
use crate::engine::summary::{SummaryOptions, write_summary};
use std::io::Write;
use tracing::{debug, instrument};

/// Writes a summary of a loaded dataset to `out`.
#[instrument(skip_all, name = "show_workflow")]
pub fn run(
    dataset: &Dataset,
    options: SummaryOptions,
    out: &mut impl Write,
) -> Result<(), EngineError> {
    debug!(
        "Summarizing a {} dataset with {} structures.",
        dataset.form(),
        dataset.len()
    );
    write_summary(dataset, options, out)?;
    Ok(())
}
