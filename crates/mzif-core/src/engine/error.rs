use super::partition::PartitionError;
use super::summary::SummaryError;
use crate::core::io::container::ContainerError;
use crate::core::io::ensemble::ParseError;
use crate::core::models::dataset::DatasetForm;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse ensemble text: {0}")]
    Parse(#[from] ParseError),

    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    #[error("Partition failed: {0}")]
    Partition(#[from] PartitionError),

    #[error("Summary failed: {0}")]
    Summary(#[from] SummaryError),

    #[error("Expected a {expected} dataset but the container holds a {found} one")]
    UnexpectedForm {
        expected: DatasetForm,
        found: DatasetForm,
    },
}
