use crate::core::models::dataset::Dataset;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for persisting a [`Dataset`] as a single blob.
///
/// Implementors own the on-disk layout; callers only hand over or receive
/// the in-memory dataset.
pub trait DatasetFile {
    /// The error type for I/O and decoding failures.
    type Error: Error + From<io::Error>;

    /// Reads a dataset from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid container or reading fails.
    fn read_from(reader: &mut impl Read) -> Result<Dataset, Self::Error>;

    /// Writes a dataset to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write_to(dataset: &Dataset, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a dataset from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoding fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a dataset to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(dataset, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
