use crate::core::models::dataset::{Dataset, RawEntry, SplitEntry};
use crate::core::models::builder::BLOCKS_PER_MODEL;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Print one line per model for raw datasets.
    pub list_models: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { list_models: true }
    }
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Unexpected record shape for model {index} of {id}: {record}")]
    UnexpectedRecordShape {
        id: String,
        /// 1-based position of the model in its entry.
        index: usize,
        record: String,
    },
}

/// Writes per-entry counts for either dataset form.
///
/// Raw entries are checked model by model. The first model whose blocks are
/// corrupt or disagree on their side is written out as-is and the report
/// stops with [`SummaryError::UnexpectedRecordShape`].
pub fn write_summary(
    dataset: &Dataset,
    options: SummaryOptions,
    out: &mut impl Write,
) -> Result<(), SummaryError> {
    match dataset {
        Dataset::Raw(entries) => {
            for entry in entries {
                write_raw_entry(entry, options, out)?;
            }
        }
        Dataset::Split(entries) => {
            for entry in entries {
                write_split_entry(entry, out)?;
            }
        }
    }
    writeln!(
        out,
        "{} structures, {} models ({} form)",
        dataset.len(),
        dataset.model_count(),
        dataset.form()
    )?;
    Ok(())
}

fn write_raw_entry(
    entry: &RawEntry,
    options: SummaryOptions,
    out: &mut impl Write,
) -> Result<(), SummaryError> {
    let n = entry.models.len();
    match entry.models.first() {
        Some(first) => writeln!(
            out,
            "{}  has {} models with {} {side}x{side} matrices.",
            entry.id,
            n,
            BLOCKS_PER_MODEL,
            side = first.side()
        )?,
        None => writeln!(out, "{}  has 0 models", entry.id)?,
    }

    for (i, model) in entry.models.iter().enumerate() {
        if !model.has_uniform_blocks() {
            writeln!(out, "{}", model)?;
            return Err(SummaryError::UnexpectedRecordShape {
                id: entry.id.to_string(),
                index: i + 1,
                record: model.to_string(),
            });
        }
        if options.list_models {
            writeln!(
                out,
                "{}  MODEL {}/{}  {} {}",
                entry.id,
                i + 1,
                n,
                model.energy,
                model.rmsd
            )?;
        }
    }
    Ok(())
}

fn write_split_entry(entry: &SplitEntry, out: &mut impl Write) -> Result<(), SummaryError> {
    writeln!(
        out,
        "{}  has {} models  native={}  decoy={}",
        entry.id,
        entry.len(),
        entry.native.len(),
        entry.decoy.len()
    )?;
    Ok(())
}
