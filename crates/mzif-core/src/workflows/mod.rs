//! # Workflows Module
//!
//! High-level entry points that tie the parser, the engine and progress
//! reporting together. Each workflow is a single synchronous call:
//!
//! - [`convert`] - parse an ensemble text file into a raw dataset.
//! - [`split`] - partition a raw dataset into native and decoy buckets.
//! - [`show`] - print a summary of a raw or split dataset.
//!
//! Persisting and loading datasets is left to the caller through
//! [`crate::core::io::traits::DatasetFile`].

pub mod convert;
pub mod show;
pub mod split;
