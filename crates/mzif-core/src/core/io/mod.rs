//! Input/output for ensemble data.
//!
//! [`ensemble`] reads the line-oriented text format. [`container`] stores a
//! parsed dataset as one binary blob behind the [`traits::DatasetFile`]
//! interface.

pub mod container;
pub mod ensemble;
pub mod traits;
