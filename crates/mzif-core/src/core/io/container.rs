use super::traits::DatasetFile;
use crate::core::models::dataset::Dataset;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Leading bytes of every container.
pub const MAGIC: [u8; 4] = *b"MZIF";
/// Bumped whenever the encoded layout of [`Dataset`] changes.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("Not a dataset container (bad magic bytes {0:?})")]
    BadMagic([u8; 4]),
    #[error("Unsupported container version {found} (this build reads version {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Binary container: `MZIF`, a little-endian `u32` version, then the bincode
/// encoding of the tagged [`Dataset`].
///
/// The dataset's variant tag is part of the encoding, so a loaded container
/// always says whether it holds raw or split entries.
pub struct ContainerFile;

impl DatasetFile for ContainerFile {
    type Error = ContainerError;

    fn read_from(reader: &mut impl Read) -> Result<Dataset, Self::Error> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(ContainerError::BadMagic(magic));
        }

        let mut version = [0u8; 4];
        reader.read_exact(&mut version)?;
        let found = u32::from_le_bytes(version);
        if found != FORMAT_VERSION {
            return Err(ContainerError::UnsupportedVersion {
                found,
                expected: FORMAT_VERSION,
            });
        }

        Ok(bincode::deserialize_from(reader)?)
    }

    fn write_to(dataset: &Dataset, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer.write_all(&MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        bincode::serialize_into(writer, dataset)?;
        Ok(())
    }
}
