use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Parse ensemble text and, with `-o`, write a raw container.
    Convert,
    /// Print a summary of an existing container.
    Show,
    /// Partition a raw container by RMSD into a split container.
    Split { threshold: f64 },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub mode: Mode,
    pub progress_enabled: bool,
    pub list_models: bool,
}
