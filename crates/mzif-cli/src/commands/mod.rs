pub mod convert;
pub mod show;
pub mod split;

use crate::error::{CliError, Result};
use mzif::core::io::container::ContainerFile;
use mzif::core::io::traits::DatasetFile;
use mzif::core::models::dataset::Dataset;
use std::path::Path;
use tracing::info;

fn load_container(path: &Path) -> Result<Dataset> {
    info!("Reading container from {:?}", path);
    ContainerFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn save_container(dataset: &Dataset, path: &Path) -> Result<()> {
    info!(
        "Writing {} container with {} structures to {:?}",
        dataset.form(),
        dataset.len(),
        path
    );
    ContainerFile::write_to_path(dataset, path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
