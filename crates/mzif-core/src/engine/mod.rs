//! # Engine Module
//!
//! - **Progress Monitoring** ([`progress`]) - the callback seam through which
//!   parsing and splitting report to a front end.
//! - **Partitioning** ([`partition`]) - native/decoy split by RMSD threshold.
//! - **Summaries** ([`summary`]) - per-structure counts for either dataset form.
//! - **Error Handling** ([`error`]) - the error type returned by the workflows.

pub mod error;
pub mod partition;
pub mod progress;
pub mod summary;
