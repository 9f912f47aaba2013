//! # Core Module
//!
//! Data structures and file formats.
//!
//! - **Dataset representation** ([`models`]) - structure identifiers, sparse
//!   blocks, models and the raw/split dataset forms.
//! - **File I/O** ([`io`]) - the streaming ensemble text parser and the
//!   versioned binary container.

pub mod io;
pub mod models;
