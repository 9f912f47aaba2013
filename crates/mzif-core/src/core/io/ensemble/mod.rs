//! Reader for the line-oriented model-ensemble text format.
//!
//! The format is a flat sequence of lines:
//!
//! ```text
//! 1ABC                        <- 4-character structure identifier
//! MODEL 1 decoy_1 -81.2 3.47  <- model header: energy and RMSD in tokens 3 and 4
//! 0.0 1.0                     <- numeric rows, 3 × width of them per model
//! ...
//! ```
//!
//! Parsing is split in three layers: [`line`] classifies a single line,
//! [`state`] holds the explicit parser state and its transition function, and
//! [`reader`] drives the state over a `BufRead` stream while tracking entries,
//! skipped headers and byte progress.

pub mod line;
pub mod reader;
pub mod state;

pub use reader::{EnsembleParser, ParseError, ParseOutcome, ParsedEntry, parse_ensemble};
