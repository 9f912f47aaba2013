//! # mzif
//!
//! Converts line-oriented structural-biology model ensembles into a compact
//! binary container, splits stored ensembles into native and decoy models by
//! RMSD, and summarizes stored containers.
//!
//! ## Layout
//!
//! - **[`core`]: Data and formats.** The dataset model (`StructureId`,
//!   `SparseBlock`, `Model`, `Dataset`), the block builder, the ensemble text
//!   parser and the binary container.
//!
//! - **[`engine`]: Processing.** Progress reporting, the native/decoy
//!   partitioner, the summary reporter and the aggregate `EngineError`.
//!
//! - **[`workflows`]: The public API.** One function per operation
//!   (`convert`, `split`, `show`) as used by the `mzif2bin` command line tool.

pub mod core;
pub mod engine;
pub mod workflows;
